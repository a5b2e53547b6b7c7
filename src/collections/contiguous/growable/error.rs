//! Error types for the fallible [`GrowableArray`](super::GrowableArray) operations.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The provided index falls outside the live range of the array. An empty array has no valid
/// index at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// The length of the array at the time of the call.
    pub len: usize,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for array with {} elements!", self.index, self.len)
    }
}

impl Error for OutOfRange {}

/// No element of the array compared equal to the removal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl Display for NotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No element equal to the target value!")
    }
}

impl Error for NotFound {}
