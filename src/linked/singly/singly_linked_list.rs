use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::{Iter, IterMut, Link, Node, NodePtr};
use crate::util::error::{EmptyStructure, IndexOutOfBounds, Structure};
use crate::util::result::ResultExtension;

/// A list with links in a single direction, keeping a pointer to its last node so that both ends
/// can be pushed to.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
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
/// | `pop_back` | `O(n)` |
/// | `at` | `O(i)` |
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn try_front(&self) -> Result<&T, EmptyStructure> {
        self.head.map(|ptr| ptr.value()).ok_or(EmptyStructure(Structure::List))
    }

    /// # Panics
    /// Panics if the list is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyStructure> {
        self.head.map(|ptr| ptr.value_mut()).ok_or(EmptyStructure(Structure::List))
    }

    /// # Panics
    /// Panics if the list is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    pub fn try_back(&self) -> Result<&T, EmptyStructure> {
        self.tail.map(|ptr| ptr.value()).ok_or(EmptyStructure(Structure::List))
    }

    /// # Panics
    /// Panics if the list is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyStructure> {
        self.tail.map(|ptr| ptr.value_mut()).ok_or(EmptyStructure(Structure::List))
    }

    /// # Panics
    /// Panics if the list is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    pub fn push_front(&mut self, value: T) {
        let node = NodePtr::from_node(Node {
            value,
            next: self.head,
        });

        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let node = NodePtr::from_node(Node { value, next: None });

        match self.tail {
            Some(tail) => tail.set_next(Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element and returns it, or an error if the list is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyStructure> {
        let head = self.head.ok_or(EmptyStructure(Structure::List))?;
        let node = head.take_node();

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Ok(node.value)
    }

    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes the last element and returns it, or an error if the list is empty. This has to walk
    /// the whole list to find the new last node.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyStructure> {
        let tail = self.tail.ok_or(EmptyStructure(Structure::List))?;

        let mut prev = None;
        let mut curr = self.head;
        while let Some(ptr) = curr {
            if ptr == tail {
                break;
            }
            prev = curr;
            curr = ptr.next();
        }

        match prev {
            Some(new_tail) => new_tail.set_next(None),
            None => self.head = None,
        }
        self.tail = prev;
        self.len -= 1;

        Ok(tail.take_node().value)
    }

    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Returns the element at `index`, or an error if the index is out of bounds.
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.nth_node(index)?.value())
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn at(&self, index: usize) -> &T {
        self.try_at(index).throw()
    }

    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.nth_node(index)?.value_mut())
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub(crate) fn nth_node(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        let mut curr = self.head;
        for _ in 0..index {
            curr = curr.and_then(NodePtr::next);
        }
        curr.ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        self.tail = None;
        while let Some(ptr) = curr {
            let node = ptr.take_node();
            curr = node.next;
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        for item in iter {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}
