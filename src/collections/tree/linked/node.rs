use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated through Box rather than raw alloc calls; dereferencing a Box lets
// take_node move the whole Node back off the heap in one step.

#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub parent: Link<T>,
    pub left: Link<T>,
    pub right: Link<T>,
    pub element: T,
}

impl<T> Node<T> {
    pub const fn leaf(parent: Link<T>, element: T) -> Node<T> {
        Node {
            parent,
            left: None,
            right: None,
            element,
        }
    }
}

impl<T> NodeRef<T> {
    pub const fn element<'a>(&self) -> &'a T {
        // SAFETY: The pointer always refers to a live node owned by the tree this NodeRef came
        // from, and borrows of it are policed at the tree boundary.
        unsafe { &self.0.as_ref().element }
    }

    pub const fn element_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for element, and the &mut self receiver keeps the access unique.
        unsafe { &mut self.0.as_mut().element }
    }

    pub fn parent<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for element.
        unsafe { &(*self.0.as_ptr()).parent }
    }

    pub fn left<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for element.
        unsafe { &(*self.0.as_ptr()).left }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn left_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for element.
        unsafe { &mut (*self.0.as_ptr()).left }
    }

    pub fn right<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for element.
        unsafe { &(*self.0.as_ptr()).right }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn right_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for element.
        unsafe { &mut (*self.0.as_ptr()).right }
    }

    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was produced by from_node and is taken back exactly once, when the
        // node is unlinked from its tree.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}
