//! Helpers shared across the collection modules and their tests.

#![warn(missing_docs)]

pub mod alloc;
pub mod result;
