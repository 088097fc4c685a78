//! A module containing [`TreeSet`] and associated types.
//!
//! As with [`HashSet`](std::collections::HashSet), there is no mutable iterator over the elements
//! of a set, because mutating them in place could break the ordering of the tree.
//!
//! [`TreeSet`] is also re-exported under the parent module.

mod iter;
mod tests;
mod tree_set;

pub use iter::*;
pub use tree_set::*;
