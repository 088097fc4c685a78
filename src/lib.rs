//! This crate is a collection of classic abstract data types, each written as a small,
//! self-contained generic container.
//!
//! # Purpose
//! These data structures are the ones usually covered in a data structures course: stacks, queues,
//! linked lists, hash maps, binary search trees and shared binary trees. Each has a small,
//! well-known set of operations and its documentation lists the time complexity of each of them.
//! The aim is for them to be simple enough to read through, while still being written to a level
//! where they could be used.
//!
//! The most interesting of them is the shared binary tree. [`BinTree`](binary_tree::BinTree) and
//! [`RcBinTree`](binary_tree::RcBinTree) are immutable trees whose subtrees can be shared between
//! several handles. Both implement [`BinaryTree`](traits::BinaryTree), which provides all of their
//! traversals, metrics and textual formats, so the only difference between them is how they count
//! references to their nodes.
//!
//! # Error Handling
//! Partial operations, such as popping from an empty stack or looking up an absent key, come in two
//! forms: a `try_*` method which returns a [`Result`], and a plain method which panics with the
//! message of the same error. The errors themselves are strongly typed structs (often ZSTs) that
//! implement [`Error`](std::error::Error), listed in the [`error`] module. Every check happens
//! before any changes are made, so a failed operation leaves its collection untouched.
//!
//! # Recursion
//! None of the linked or tree-based collections use recursion, whether it's for traversal,
//! cloning or dropping. A tree that has degraded into a list, such as a
//! [`TreeMap`](binary_tree::TreeMap) built from sorted keys, is slow but can't overflow the stack.
//!
//! # Dependencies
//! This crate depends on some derive macros for its errors, because they're helpful and remove the
//! need for some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "binary_tree")]
pub mod traits;

pub(crate) mod util;

pub use util::error;
