//! Hash-based collections, currently just [`HashMap`], along with the [`FnvBuildHasher`] that can
//! be used in place of the standard library's [`RandomState`](std::hash::RandomState).

mod fnv;
pub mod map;

#[doc(inline)]
pub use fnv::*;
#[doc(inline)]
pub use map::HashMap;
