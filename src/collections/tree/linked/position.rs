use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{LinkedBinaryTree, NodeRef};
use crate::collections::tree::Position;

/// A position within a [`LinkedBinaryTree`]: a copyable handle to one node, valid for as long as
/// the tree is borrowed.
///
/// Equality is node identity, not element equality: two positions are equal iff they denote the
/// same node. The `'t` brand ties each position to a shared borrow of its tree, so the borrow
/// checker rules out using a position after the tree is mutated or dropped.
pub struct NodePosition<'t, T> {
    pub(crate) node: NodeRef<T>,
    pub(crate) _tree: PhantomData<&'t LinkedBinaryTree<T>>,
}

impl<T> NodePosition<'_, T> {
    pub(crate) const fn new(node: NodeRef<T>) -> Self {
        NodePosition {
            node,
            _tree: PhantomData,
        }
    }
}

impl<T> Position for NodePosition<'_, T> {
    type Elem = T;

    fn element(&self) -> &T {
        self.node.element()
    }
}

impl<T> Clone for NodePosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePosition<'_, T> {}

impl<T> PartialEq for NodePosition<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for NodePosition<'_, T> {}

impl<T: Debug> Debug for NodePosition<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePosition")
            .field("element", self.node.element())
            .finish()
    }
}
