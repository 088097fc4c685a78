pub mod error;
#[cfg(any(feature = "hash", feature = "binary_tree"))]
pub mod fmt;
pub mod panic;
pub mod result;

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod hash;
