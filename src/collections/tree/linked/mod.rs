//! A module containing [`LinkedBinaryTree`] and associated types.
//!
//! [`LinkedBinaryTree`] is a concrete, heap-linked implementation of the [`Tree`](super::Tree)
//! and [`BinaryTree`](super::BinaryTree) contracts. Reading goes through [`NodePosition`] handles
//! obtained from the trait methods; building goes through a [`CursorMut`], which holds the tree
//! mutably and therefore cannot coexist with any position.

mod cursor;
pub mod error;
mod linked_binary_tree;
mod node;
mod position;
mod tests;

pub use cursor::*;
pub use linked_binary_tree::*;
pub(crate) use node::*;
pub use position::*;
