//! Contiguous collection types. Currently only [`GrowableArray`], a variable length collection
//! over a manually managed fixed-capacity buffer.
#![warn(missing_docs)]

pub mod growable;

#[doc(inline)]
pub use growable::GrowableArray;
