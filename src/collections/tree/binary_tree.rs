use super::Tree;

/// A refinement of [`Tree`] for trees where every position has at most two children, known as its
/// left and right child. Child order is significant: the left child always precedes the right.
pub trait BinaryTree: Tree {
    /// Returns the left child of `pos`, or [`None`] if it has no left child.
    fn left<'t>(&'t self, pos: &Self::Position<'t>) -> Option<Self::Position<'t>>;

    /// Returns the right child of `pos`, or [`None`] if it has no right child.
    fn right<'t>(&'t self, pos: &Self::Position<'t>) -> Option<Self::Position<'t>>;

    /// Returns the other child of `pos`'s parent: [`None`] if `pos` is the root or an only child.
    ///
    /// The rule is literal: when `pos` is its parent's left child the result is the right child,
    /// otherwise it is the left child. A malformed tree in which `pos` is neither recognized
    /// child still terminates here, falling through to the second arm.
    fn sibling<'t>(&'t self, pos: &Self::Position<'t>) -> Option<Self::Position<'t>> {
        let parent = self.parent(pos)?;

        match self.left(&parent) {
            Some(left) if left == *pos => self.right(&parent),
            other => other,
        }
    }

    /// Returns a lazy iterator over the children of `pos`: the left child first (if present),
    /// then the right (if present), and nothing for a leaf. Each call produces a fresh iterator.
    ///
    /// A conforming binary tree implements [`Tree::children`] by delegating here, which keeps the
    /// two traits' notions of "children" consistent.
    fn left_then_right<'t>(
        &'t self,
        pos: &Self::Position<'t>,
    ) -> impl Iterator<Item = Self::Position<'t>> {
        self.left(pos).into_iter().chain(self.right(pos))
    }
}
