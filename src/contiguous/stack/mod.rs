//! A module containing [`Stack`] and associated types.
//!
//! Borrowed iteration runs from the top of the stack to the bottom, owned iteration pops every
//! element in turn.
//!
//! [`Stack`] is also re-exported under the parent module.

mod iter;
mod stack;
mod tests;

pub use iter::*;
pub use stack::*;

#[doc(inline)]
pub use crate::util::error::{EmptyStructure, Structure};
