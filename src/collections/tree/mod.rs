//! An abstract positional-tree interface, its binary-tree refinement and a linked implementation.
//!
//! The traits here are the contract: a concrete tree supplies the primitive accessors
//! ([`Tree::root`], [`Tree::parent`], [`Tree::num_children`], [`Tree::children`], [`Tree::size`]
//! and, for binary trees, [`BinaryTree::left`]/[`BinaryTree::right`]), and every derived query
//! (depth, height, sibling and friends) comes for free. Leaving a primitive unimplemented is a
//! compile error rather than a runtime one, so there is no "unimplemented" error kind to handle.
//!
//! Positions are small copyable handles branded with a borrow of their tree, so a position can
//! only be used while its tree is alive and unmutated.

mod binary_tree;
pub mod linked;
mod position;
mod tree;

pub use binary_tree::*;
pub use position::*;
pub use tree::*;
