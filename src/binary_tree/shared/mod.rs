//! A module containing the shared binary trees, [`BinTree`] and [`RcBinTree`], along with the
//! [`Tokens`] adapter used to read them from a stream.
//!
//! Both trees implement [`BinaryTree`](crate::traits::BinaryTree) and behave identically: the only
//! difference is that [`BinTree`] counts the handles to each node itself, while [`RcBinTree`]
//! leaves that to [`Rc`](std::rc::Rc).

mod bin_tree;
mod rc_bin_tree;
mod tests;
mod tokens;

pub use bin_tree::*;
pub use rc_bin_tree::*;
pub use tokens::*;
