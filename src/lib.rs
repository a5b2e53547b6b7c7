//! Textbook data-structure exercises: a growable array built by hand on a raw
//! fixed-capacity buffer, and a positional tree ADT with a binary-tree
//! refinement and a linked implementation of it.
//!
//! # Purpose
//! This crate is a learning exercise, with no expectation for it to be used in
//! production. Writing the structures from their raw parts (allocations,
//! pointers, uninitialized slots) is the point; nothing here is backed by
//! [`Vec`] or the other `std` collections.
//!
//! # Error Handling
//! Fallible operations return [`Result`]s that are strongly typed, using enums
//! for static dispatch rather than dynamic, with structs (often ZSTs) that
//! implement [`Error`](std::error::Error). Out-of-range indexing an array or
//! inserting into an occupied tree slot are conditions a caller can handle, so
//! they are never panics here.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove
//! the need for some very repetitive programming. Everything else is `std`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
