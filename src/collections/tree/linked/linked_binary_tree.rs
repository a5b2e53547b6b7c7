use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{CursorMut, Link, NodePosition};
use crate::collections::tree::{BinaryTree, Tree};

/// A binary tree of heap-linked nodes, implementing the [`Tree`] and [`BinaryTree`] contracts.
///
/// Reading is positional: [`Tree::root`] hands out a [`NodePosition`] and the trait methods
/// navigate from there. Building goes through [`cursor_mut`](LinkedBinaryTree::cursor_mut), whose
/// mutable borrow of the tree guarantees no position outlives a mutation.
///
/// # Examples
/// ```
/// # use dsa_exercises::collections::tree::{BinaryTree, Position, Tree};
/// # use dsa_exercises::collections::tree::linked::LinkedBinaryTree;
/// let mut tree = LinkedBinaryTree::new();
/// let mut cursor = tree.cursor_mut();
/// cursor.insert_root('a')?;
/// cursor.insert_left('b')?;
/// cursor.insert_right('c')?;
///
/// let root = tree.root().ok_or("tree is no longer empty")?;
/// assert_eq!(root.element(), &'a');
/// assert_eq!(tree.num_children(&root), 2);
/// assert_eq!(tree.height(), 1);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub struct LinkedBinaryTree<T> {
    pub(crate) root: Link<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> LinkedBinaryTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> LinkedBinaryTree<T> {
        LinkedBinaryTree {
            root: None,
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns a cursor for traversing and extending the tree, initially positioned at the root
    /// (or detached, for an empty tree).
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }
}

impl<T> Tree for LinkedBinaryTree<T> {
    type Elem = T;

    type Position<'t>
        = NodePosition<'t, T>
    where
        Self: 't;

    fn root(&self) -> Option<NodePosition<'_, T>> {
        self.root.map(NodePosition::new)
    }

    fn parent<'t>(&'t self, pos: &NodePosition<'t, T>) -> Option<NodePosition<'t, T>> {
        pos.node.parent().map(NodePosition::new)
    }

    fn num_children<'t>(&'t self, pos: &NodePosition<'t, T>) -> usize {
        pos.node.left().is_some() as usize + pos.node.right().is_some() as usize
    }

    fn children<'t>(
        &'t self,
        pos: &NodePosition<'t, T>,
    ) -> impl Iterator<Item = NodePosition<'t, T>> {
        self.left_then_right(pos)
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<T> BinaryTree for LinkedBinaryTree<T> {
    fn left<'t>(&'t self, pos: &NodePosition<'t, T>) -> Option<NodePosition<'t, T>> {
        pos.node.left().map(NodePosition::new)
    }

    fn right<'t>(&'t self, pos: &NodePosition<'t, T>) -> Option<NodePosition<'t, T>> {
        pos.node.right().map(NodePosition::new)
    }
}

impl<T> Default for LinkedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedBinaryTree<T> {
    // Walks the tree with the parent links instead of recursing, so a degenerate chain can't
    // exhaust the stack. Child links are severed on the way down, which means each node is
    // revisited at most twice before it is freed.
    fn drop(&mut self) {
        let mut current = self.root.take();
        while let Some(node) = current {
            if let Some(left) = node.left_mut().take() {
                current = Some(left);
            } else if let Some(right) = node.right_mut().take() {
                current = Some(right);
            } else {
                // Both children are gone and the parent link has been read, so the node can be
                // released without leaving a dangling reference behind.
                current = *node.parent();
                drop(node.take_node());
            }
        }
    }
}

// SAFETY: LinkedBinaryTrees, when used safely rely on unique pointers and are therefore safe for
// Send when T: Send.
unsafe impl<T: Send> Send for LinkedBinaryTree<T> {}
// SAFETY: LinkedBinaryTree's safe API obeys all rules of the borrow checker, so no interior
// mutability occurs. This means that LinkedBinaryTree<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for LinkedBinaryTree<T> {}

impl<T: Debug> Debug for LinkedBinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedBinaryTree")
            .field("root", &self.root.map(|node| node.element()))
            .field("size", &self.size)
            .finish()
    }
}
