use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::util::error::{EmptyStructure, Structure};
use crate::util::result::ResultExtension;

pub(crate) const INITIAL_CAPACITY: usize = 10;

const GROWTH_FACTOR: usize = 2;

/// A last-in first-out stack, backed by a contiguous, growable buffer.
///
/// The capacity starts at 10 and doubles whenever the buffer fills up, so pushing is amortized
/// constant time.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
/// | `eq` | `O(n)` |
///
/// \* If the Stack doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct Stack<T> {
    pub(crate) buf: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack with the initial capacity.
    pub fn new() -> Stack<T> {
        Stack {
            buf: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Returns the number of elements on the Stack.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the Stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the Stack can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.buf.capacity()
    }

    /// Pushes `value` onto the top of the Stack, doubling the capacity if it's full.
    pub fn push(&mut self, value: T) {
        if self.buf.len() == self.buf.capacity() {
            self.grow();
        }
        self.buf.push(value);
    }

    /// Removes the top element and returns it, or an error if the Stack is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyStructure> {
        self.buf.pop().ok_or(EmptyStructure(Structure::Stack))
    }

    /// Removes the top element and returns it.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Returns a reference to the top element, or an error if the Stack is empty.
    pub fn try_top(&self) -> Result<&T, EmptyStructure> {
        self.buf.last().ok_or(EmptyStructure(Structure::Stack))
    }

    /// Returns a reference to the top element.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    /// Returns a mutable reference to the top element, or an error if the Stack is empty.
    pub fn try_top_mut(&mut self) -> Result<&mut T, EmptyStructure> {
        self.buf.last_mut().ok_or(EmptyStructure(Structure::Stack))
    }

    /// Returns a mutable reference to the top element.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn top_mut(&mut self) -> &mut T {
        self.try_top_mut().throw()
    }

    /// Returns an iterator over the elements, from the top of the Stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub(crate) fn grow(&mut self) {
        let new_cap = std::cmp::max(self.buf.capacity() * GROWTH_FACTOR, INITIAL_CAPACITY);
        self.buf.reserve_exact(new_cap - self.buf.len());
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.len() + INITIAL_CAPACITY);
        buf.extend(self.buf.iter().cloned());
        Stack { buf }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_to_bottom", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            writeln!(f, "| {:<2}|", item.to_string())?;
        }
        writeln!(f, "|---|")
    }
}
