//! A module containing [`Queue`], a first-in first-out adapter over
//! [`SinglyLinkedList`](crate::linked::SinglyLinkedList).
//!
//! [`Queue`] is also re-exported under the parent module.

mod queue;
mod tests;

pub use queue::*;
