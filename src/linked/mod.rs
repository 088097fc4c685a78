//! Linked collection types: a [`DoublyLinkedList`] with its [`CursorMut`], a [`SinglyLinkedList`]
//! and the [`Queue`] and [`LinkedStack`] adapters built on top of it.

pub mod list;
pub mod queue;
pub mod singly;
pub mod stack;

#[doc(inline)]
pub use list::{CursorMut, DoublyLinkedList};
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use singly::SinglyLinkedList;
#[doc(inline)]
pub use stack::LinkedStack;
