//! Error types for the fallible [`CursorMut`](super::CursorMut) operations.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The cursor is not positioned at a node, which only happens over an empty tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detached;

impl Display for Detached {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor is not positioned at a node!")
    }
}

impl Error for Detached {}

/// The slot targeted by an insertion already holds a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOccupied;

impl Display for SlotOccupied {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Targeted child slot is already occupied!")
    }
}

impl Error for SlotOccupied {}

/// Either of the ways a cursor insertion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CursorError {
    Detached(Detached),
    SlotOccupied(SlotOccupied),
}
