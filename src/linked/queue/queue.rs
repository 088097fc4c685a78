use std::fmt::{self, Debug, Display, Formatter};

use crate::linked::singly::{IntoIter, Iter, SinglyLinkedList};
use crate::util::error::{EmptyStructure, Structure};
use crate::util::result::ResultExtension;

/// A first-in first-out queue. Elements are pushed at the back and popped from the front.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
pub struct Queue<T> {
    pub(crate) inner: SinglyLinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            inner: SinglyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push_back(&mut self, value: T) {
        self.inner.push_back(value)
    }

    pub fn try_pop_front(&mut self) -> Result<T, EmptyStructure> {
        self.inner.try_pop_front().map_err(|_| EmptyStructure(Structure::Queue))
    }

    /// Removes the element at the front of the queue and returns it.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    pub fn try_front(&self) -> Result<&T, EmptyStructure> {
        self.inner.try_front().map_err(|_| EmptyStructure(Structure::Queue))
    }

    /// Returns the element that would be popped next.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    pub fn try_back(&self) -> Result<&T, EmptyStructure> {
        self.inner.try_back().map_err(|_| EmptyStructure(Structure::Queue))
    }

    /// Returns the most recently pushed element.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns an iterator from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front_to_back", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
