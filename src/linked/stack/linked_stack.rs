use std::fmt::{self, Debug, Display, Formatter};

use crate::linked::singly::{IntoIter, Iter, SinglyLinkedList};
use crate::util::error::{EmptyStructure, Structure};
use crate::util::result::ResultExtension;

/// A last-in first-out stack made of linked nodes. Unlike [`Stack`](crate::contiguous::Stack), it
/// never has to reallocate, so every push is `O(1)`.
pub struct LinkedStack<T> {
    pub(crate) inner: SinglyLinkedList<T>,
}

impl<T> LinkedStack<T> {
    pub const fn new() -> LinkedStack<T> {
        LinkedStack {
            inner: SinglyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.inner.push_front(value)
    }

    pub fn try_pop(&mut self) -> Result<T, EmptyStructure> {
        self.inner.try_pop_front().map_err(|_| EmptyStructure(Structure::Stack))
    }

    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    pub fn try_top(&self) -> Result<&T, EmptyStructure> {
        self.inner.try_front().map_err(|_| EmptyStructure(Structure::Stack))
    }

    /// # Panics
    /// Panics if the stack is empty.
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    pub fn try_top_mut(&mut self) -> Result<&mut T, EmptyStructure> {
        self.inner.try_front_mut().map_err(|_| EmptyStructure(Structure::Stack))
    }

    /// # Panics
    /// Panics if the stack is empty.
    pub fn top_mut(&mut self) -> &mut T {
        self.try_top_mut().throw()
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        LinkedStack {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for LinkedStack<T> {}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for LinkedStack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("top_to_bottom", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            writeln!(f, "| {:<2}|", item.to_string())?;
        }
        writeln!(f, "|---|")
    }
}
