use super::error::{CursorError, Detached, SlotOccupied};
use super::{Link, LinkedBinaryTree, Node, NodeRef};

/// A type for traversal and extension of a [`LinkedBinaryTree`]. See
/// [`LinkedBinaryTree::cursor_mut`] to create one.
///
/// The cursor rests on one node of the tree (or nowhere, for an empty tree). Movement methods
/// saturate: moving toward a child or parent that doesn't exist leaves the cursor where it is,
/// which keeps them chainable. Insertion methods are fallible instead, because inserting into an
/// occupied slot would have to throw a subtree away.
///
/// Holding a cursor borrows the tree mutably, so no [`NodePosition`](super::NodePosition) can
/// exist while one is alive.
pub struct CursorMut<'t, T> {
    pub(crate) tree: &'t mut LinkedBinaryTree<T>,
    pub(crate) node: Link<T>,
}

impl<'t, T> CursorMut<'t, T> {
    pub(crate) fn new(tree: &'t mut LinkedBinaryTree<T>) -> CursorMut<'t, T> {
        let node = tree.root;
        CursorMut { tree, node }
    }

    /// Returns a reference to the element under the cursor, or [`None`] if the cursor is
    /// detached.
    pub fn read(&self) -> Option<&T> {
        self.node.as_ref().map(|node| node.element())
    }

    /// Returns a mutable reference to the element under the cursor, or [`None`] if the cursor is
    /// detached.
    pub fn read_mut(&mut self) -> Option<&mut T> {
        self.node.as_mut().map(|node| node.element_mut())
    }

    /// Moves the cursor to the left child of the current node, if there is one.
    pub fn move_left(&mut self) -> &mut Self {
        if let Some(node) = self.node {
            if let Some(left) = *node.left() {
                self.node = Some(left);
            }
        }
        self
    }

    /// Moves the cursor to the right child of the current node, if there is one.
    pub fn move_right(&mut self) -> &mut Self {
        if let Some(node) = self.node {
            if let Some(right) = *node.right() {
                self.node = Some(right);
            }
        }
        self
    }

    /// Moves the cursor to the parent of the current node, if it isn't the root.
    pub fn move_up(&mut self) -> &mut Self {
        if let Some(node) = self.node {
            if let Some(parent) = *node.parent() {
                self.node = Some(parent);
            }
        }
        self
    }

    /// Inserts a root node into an empty tree and moves the cursor onto it.
    ///
    /// # Errors
    /// Fails with [`SlotOccupied`] if the tree already has a root.
    pub fn insert_root(&mut self, element: T) -> Result<&mut Self, SlotOccupied> {
        if self.tree.root.is_some() {
            return Err(SlotOccupied);
        }

        let node = NodeRef::from_node(Node::leaf(None, element));
        self.tree.root = Some(node);
        self.tree.size += 1;
        self.node = Some(node);
        Ok(self)
    }

    /// Inserts a left child under the current node. The cursor does not move.
    ///
    /// # Errors
    /// Fails with [`Detached`] if the cursor is not on a node, or [`SlotOccupied`] if the node
    /// already has a left child.
    pub fn insert_left(&mut self, element: T) -> Result<&mut Self, CursorError> {
        let Some(node) = self.node else {
            return Err(Detached.into());
        };
        if node.left().is_some() {
            return Err(SlotOccupied.into());
        }

        *node.left_mut() = Some(NodeRef::from_node(Node::leaf(Some(node), element)));
        self.tree.size += 1;
        Ok(self)
    }

    /// Inserts a right child under the current node. The cursor does not move.
    ///
    /// # Errors
    /// Fails with [`Detached`] if the cursor is not on a node, or [`SlotOccupied`] if the node
    /// already has a right child.
    pub fn insert_right(&mut self, element: T) -> Result<&mut Self, CursorError> {
        let Some(node) = self.node else {
            return Err(Detached.into());
        };
        if node.right().is_some() {
            return Err(SlotOccupied.into());
        }

        *node.right_mut() = Some(NodeRef::from_node(Node::leaf(Some(node), element)));
        self.tree.size += 1;
        Ok(self)
    }

    /// Returns true if the cursor is not positioned at a node.
    pub const fn is_detached(&self) -> bool {
        self.node.is_none()
    }
}
