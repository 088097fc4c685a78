//! Contiguous collection types. Currently just [`Stack`], a LIFO collection backed by a growable
//! buffer.

pub mod stack;

#[doc(inline)]
pub use stack::Stack;
