//! A module containing [`GrowableArray`] and associated types.
//!
//! [`IntoIter`] provides owned iteration over a [`GrowableArray`]. [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration, via
//! `Deref<Target = [T]>`.
//!
//! [`GrowableArray`] is also re-exported under the parent module.

mod buffer;
pub mod error;
mod growable_array;
mod iter;

pub(crate) use buffer::*;
pub use growable_array::*;
pub use iter::*;
