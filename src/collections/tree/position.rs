/// An opaque handle to one node's location within a specific tree.
///
/// Two positions compare equal iff they denote the same node of the same tree, which is why
/// [`PartialEq`] is a supertrait rather than an optional extra. Positions are non-owning: a
/// concrete tree owns the node storage and hands out positions that borrow it.
pub trait Position: PartialEq {
    /// The element type stored at each node.
    type Elem;

    /// Returns a reference to the element stored at this position.
    fn element(&self) -> &Self::Elem;
}
