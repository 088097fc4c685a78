//! A module containing [`LinkedStack`], a last-in first-out adapter over
//! [`SinglyLinkedList`](crate::linked::SinglyLinkedList).
//!
//! [`LinkedStack`] is also re-exported under the parent module.

mod linked_stack;
mod tests;

pub use linked_stack::*;
