//! The two data structures this crate implements.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as pointers, allocations, amortized growth and trait-based abstract interfaces.
//!
//! The two modules are deliberately independent: nothing in [`contiguous`] knows about [`tree`]
//! and vice versa.

pub mod contiguous;
pub mod tree;
