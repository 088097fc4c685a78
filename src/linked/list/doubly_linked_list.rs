use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{CursorMut, Iter, IterMut, Length, Link, Node, NodePtr, ONE};
use crate::util::error::{EmptyStructure, IndexOutOfBounds, Structure};
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`CursorMut`] for editing the list at a
/// position.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `at` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// Every traversal of a binary tree in this crate produces one of these lists.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new, empty list. Doesn't allocate.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Returns the first element, or an error if the list is empty.
    pub fn try_front(&self) -> Result<&T, EmptyStructure> {
        match &self.state {
            Empty => Err(EmptyStructure(Structure::List)),
            Full(ListContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Returns the first element.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyStructure> {
        match &self.state {
            Empty => Err(EmptyStructure(Structure::List)),
            Full(ListContents { head, .. }) => Ok(head.value_mut()),
        }
    }

    /// # Panics
    /// Panics if the list is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    /// Returns the last element, or an error if the list is empty.
    pub fn try_back(&self) -> Result<&T, EmptyStructure> {
        match &self.state {
            Empty => Err(EmptyStructure(Structure::List)),
            Full(ListContents { tail, .. }) => Ok(tail.value()),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyStructure> {
        match &self.state {
            Empty => Err(EmptyStructure(Structure::List)),
            Full(ListContents { tail, .. }) => Ok(tail.value_mut()),
        }
    }

    /// # Panics
    /// Panics if the list is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element and returns it, or an error if the list is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyStructure> {
        match &self.state {
            Empty => Err(EmptyStructure(Structure::List)),
            Full(ListContents { head, .. }) => {
                let head = *head;
                Ok(self.unlink(head))
            },
        }
    }

    /// Removes the first element and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes the last element and returns it, or an error if the list is empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyStructure> {
        match &self.state {
            Empty => Err(EmptyStructure(Structure::List)),
            Full(ListContents { tail, .. }) => {
                let tail = *tail;
                Ok(self.unlink(tail))
            },
        }
    }

    /// Removes the last element and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Returns the element at `index`, or an error if the index is out of bounds.
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns the element at `index`, where the front of the list is at index 0.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn at(&self, index: usize) -> &T {
        self.try_at(index).throw()
    }

    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|i| i == item)
    }

    /// Moves all elements of `other` onto the back of this list, in `O(1)`.
    pub fn append(&mut self, mut other: DoublyLinkedList<T>) {
        let other_contents = match mem::take(&mut other.state) {
            Empty => return,
            Full(contents) => contents,
        };

        match &mut self.state {
            Empty => self.state = Full(other_contents),
            Full(self_contents) => {
                self_contents.tail.set_next(Some(other_contents.head));
                other_contents.head.set_prev(Some(self_contents.tail));
                self_contents.tail = other_contents.tail;
                self_contents.len = self_contents.len.add(other_contents.len);
            },
        }
    }

    /// Returns a cursor positioned on the first element (or at the end if the list is empty).
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let curr = self.head();
        CursorMut {
            list: self,
            curr,
            index: 0,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) const fn head(&self) -> Link<T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub(crate) const fn tail(&self) -> Link<T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(*tail),
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    /// Inserts `value` directly before `next`, or at the back if `next` is None.
    pub(crate) fn link_before(&mut self, value: T, next: Link<T>) {
        match next {
            None => self.push_back(value),
            Some(next_node) => match next_node.prev() {
                None => self.push_front(value),
                Some(prev_node) => {
                    let node = NodePtr::from_node(Node {
                        value,
                        prev: Some(prev_node),
                        next: Some(next_node),
                    });
                    prev_node.set_next(Some(node));
                    next_node.set_prev(Some(node));

                    if let Full(contents) = &mut self.state {
                        contents.len = contents.len.inc();
                    }
                },
            },
        }
    }

    /// Removes `node` from the list and returns its value. The node must belong to this list.
    pub(crate) fn unlink(&mut self, node: NodePtr<T>) -> T {
        let Node { value, prev, next } = node.take_node();

        match prev {
            Some(prev_node) => prev_node.set_next(next),
            None => {
                if let (Full(contents), Some(next_node)) = (&mut self.state, next) {
                    contents.head = next_node;
                }
            },
        }
        match next {
            Some(next_node) => next_node.set_prev(prev),
            None => {
                if let (Full(contents), Some(prev_node)) = (&mut self.state, prev) {
                    contents.tail = prev_node;
                }
            },
        }

        if let Full(contents) = &mut self.state {
            match contents.len.dec() {
                Some(new_len) => contents.len = new_len,
                None => self.state = Empty,
            }
        }

        value
    }
}

impl<T> ListContents<T> {
    pub(crate) fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index)
        } else {
            self.seek_bwd(index)
        }
    }

    fn seek_fwd(&self, index: usize) -> NodePtr<T> {
        let mut curr = self.head;
        for _ in 0..index {
            // UNWRAP: index is less than the length, so there are enough nodes.
            curr = curr.next().expect("list links are corrupted");
        }
        curr
    }

    fn seek_bwd(&self, index: usize) -> NodePtr<T> {
        let mut curr = self.tail;
        for _ in index + 1..self.len.get() {
            curr = curr.prev().expect("list links are corrupted");
        }
        curr
    }

    pub(crate) fn push_front(&mut self, value: T) {
        self.len = self.len.inc();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        self.head.set_prev(Some(node));
        self.head = node;
    }

    pub(crate) fn push_back(&mut self, value: T) {
        self.len = self.len.inc();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        self.tail.set_next(Some(node));
        self.tail = node;
    }

    pub(crate) fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub(crate) fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index)
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: PartialEq> PartialEq<[T]> for DoublyLinkedList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DoublyLinkedList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head();
        self.state = Empty;
        while let Some(ptr) = curr {
            curr = ptr.next();
            drop(ptr.take_node());
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "({first})")?;
        }
        for item in iter {
            write!(f, " -> ({item})")?;
        }
        Ok(())
    }
}
