//! A module containing [`HashMap`] and associated types.
//!
//! The iterators here yield entries in the order of their bins, which changes as the map grows.
//! As a note, there is no iterator with mutable access to the keys of a map, because changing a
//! key's hash would leave it in the wrong bin.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod hash_map;
mod iter;

pub use hash_map::*;
pub use iter::*;

#[doc(inline)]
pub use crate::util::error::BadKey;
