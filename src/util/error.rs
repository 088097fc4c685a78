//! Error types shared by all of the collections in this crate.
//!
//! Each failure condition is its own small type, so that a method's signature says exactly how it
//! can fail. [`AdtError`] unifies them for callers that would rather use a single type with `?`.

use std::io;

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The kind of collection that an [`EmptyStructure`] error originated from.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    #[display("stack")]
    Stack,
    #[display("queue")]
    Queue,
    #[display("list")]
    List,
    #[display("tree")]
    Tree,
}

/// A partial operation, such as `pop` or `elem`, was applied to an empty collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cannot access the {_0}: it is empty")]
pub struct EmptyStructure(#[error(not(source))] pub Structure);

/// A cursor or iterator was used outside of its valid range.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid access: position is outside of the valid range")]
pub struct InvalidAccess;

/// An index was outside of the bounds of an indexed collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A key was looked up through a partial accessor, but isn't present in the map.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("bad key: no entry exists for the provided key")]
pub struct BadKey;

/// Any of the errors produced by a collection method.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum AdtError {
    EmptyStructure(EmptyStructure),
    InvalidAccess(InvalidAccess),
    IndexOutOfBounds(IndexOutOfBounds),
    BadKey(BadKey),
}

/// An error produced while reading a binary tree from its textual form.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum ParseTreeError {
    #[display("input ended before the tree was complete")]
    UnexpectedEnd,
    #[display("expected `{expected}` but found `{found}`")]
    Expected {
        expected: &'static str,
        found: String,
    },
    #[display("`{token}` is not a valid tree element")]
    InvalidElement { token: String },
    #[display("unexpected trailing input starting at `{token}`")]
    TrailingInput { token: String },
    #[display("failed to read tree input: {_0}")]
    #[from]
    Io(io::Error),
}
