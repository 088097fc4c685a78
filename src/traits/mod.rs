//! Traits shared by several collections in this crate.
//!
//! At the moment, the only trait is [`BinaryTree`], which is implemented by both shared tree types
//! in [`binary_tree`](crate::binary_tree). Everything that can be written in terms of a tree's
//! handles (traversals, metrics, equality, rendering and the textual formats) is provided by the
//! trait, so the two ownership strategies only differ in how they count references.

mod tree;

pub use tree::*;
