use super::{DoublyLinkedList, Link};
use crate::util::error::InvalidAccess;
use crate::util::result::ResultExtension;

/// A cursor over a [`DoublyLinkedList`] that can edit the list around its position.
///
/// The cursor is either on an element or at the end position, just past the last element. Reading,
/// advancing and removing are invalid at the end position, while inserting there appends to the
/// list.
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut DoublyLinkedList<T>,
    pub(crate) curr: Link<T>,
    pub(crate) index: usize,
}

impl<T> CursorMut<'_, T> {
    /// Returns true if the cursor is at the end position.
    pub const fn is_end(&self) -> bool {
        self.curr.is_none()
    }

    /// Returns the index of the current element, or None at the end position.
    pub const fn index(&self) -> Option<usize> {
        match self.curr {
            Some(_) => Some(self.index),
            None => None,
        }
    }

    pub fn try_current(&self) -> Result<&T, InvalidAccess> {
        self.curr.map(|ptr| ptr.value()).ok_or(InvalidAccess)
    }

    /// # Panics
    /// Panics if the cursor is at the end position.
    pub fn current(&self) -> &T {
        self.try_current().throw()
    }

    pub fn try_current_mut(&mut self) -> Result<&mut T, InvalidAccess> {
        self.curr.map(|ptr| ptr.value_mut()).ok_or(InvalidAccess)
    }

    /// # Panics
    /// Panics if the cursor is at the end position.
    pub fn current_mut(&mut self) -> &mut T {
        self.try_current_mut().throw()
    }

    /// Moves the cursor to the next element, or to the end position after the last one.
    pub fn try_move_next(&mut self) -> Result<(), InvalidAccess> {
        let ptr = self.curr.ok_or(InvalidAccess)?;
        self.curr = ptr.next();
        self.index += 1;
        Ok(())
    }

    /// # Panics
    /// Panics if the cursor is already at the end position.
    pub fn move_next(&mut self) {
        self.try_move_next().throw()
    }

    /// Inserts `value` just before the current position. The cursor stays on the same element,
    /// which now has an index one greater. At the end position, this appends to the list.
    pub fn insert_before(&mut self, value: T) {
        self.list.link_before(value, self.curr);
        self.index += 1;
    }

    /// Removes the current element and returns it, moving the cursor onto the element that
    /// followed it.
    pub fn try_remove_current(&mut self) -> Result<T, InvalidAccess> {
        let ptr = self.curr.ok_or(InvalidAccess)?;
        self.curr = ptr.next();
        Ok(self.list.unlink(ptr))
    }

    /// # Panics
    /// Panics if the cursor is at the end position.
    pub fn remove_current(&mut self) -> T {
        self.try_remove_current().throw()
    }

    /// Returns the list the cursor is editing.
    pub fn list(&self) -> &DoublyLinkedList<T> {
        self.list
    }
}
