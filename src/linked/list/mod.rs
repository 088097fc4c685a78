//! A module containing [`DoublyLinkedList`] and associated types.
//!
//! Besides iteration, the list offers a [`CursorMut`] for editing at a position in `O(1)`.
//!
//! [`DoublyLinkedList`] is also re-exported under the parent module.

mod cursor;
mod doubly_linked_list;
mod iter;
mod length;
mod node;
mod tests;

pub use cursor::*;
pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;

#[doc(inline)]
pub use crate::util::error::{EmptyStructure, IndexOutOfBounds, InvalidAccess, Structure};
