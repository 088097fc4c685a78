//! Binary tree collections.
//!
//! [`BinTree`] and [`RcBinTree`] are immutable, structurally shared trees, whose behaviour is
//! provided by the [`BinaryTree`](crate::traits::BinaryTree) trait. [`TreeMap`] and [`TreeSet`]
//! are ordered collections backed by an unbalanced binary search tree.

pub mod map;
pub mod set;
pub mod shared;

#[doc(inline)]
pub use map::TreeMap;
#[doc(inline)]
pub use set::TreeSet;
#[doc(inline)]
pub use shared::{BinTree, RcBinTree, Tokens};

#[doc(inline)]
pub use crate::traits::BinaryTree;
