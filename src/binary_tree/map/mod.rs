//! A module containing [`TreeMap`] and associated types.
//!
//! All of the iterators here yield entries in ascending order of their keys. [`Iter`] can also be
//! created part way through a map, with [`TreeMap::find`].
//!
//! [`TreeMap`] is also re-exported under the parent module.

mod iter;
mod node;
mod tree_map;

pub use iter::*;
pub(crate) use node::*;
pub use tree_map::*;

#[doc(inline)]
pub use crate::util::error::BadKey;
