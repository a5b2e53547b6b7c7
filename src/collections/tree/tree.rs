use super::Position;

/// The abstract contract for a positional tree: the set of all positions plus the parent/child
/// relationships among them, rooted at a single position (or empty).
///
/// A conforming implementation supplies [`root`](Tree::root), [`parent`](Tree::parent),
/// [`num_children`](Tree::num_children), [`children`](Tree::children) and [`size`](Tree::size);
/// everything else is derived from those and works for any conforming tree.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows, assuming the five
/// primitives are `O(1)` per position yielded:
/// - `n`: The number of nodes in the tree.
/// - `d`: The depth of the position in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `is_root` | `O(1)` |
/// | `is_leaf` | `O(1)` |
/// | `is_empty` | `O(1)` |
/// | `depth` | `O(d)` |
/// | `height` | `O(n)` |
/// | `height_of` | `O(n)` |
/// | `height_by_depth` | `O(n * d)` |
pub trait Tree {
    /// The element type stored at each node.
    type Elem;

    /// The position handle for this tree. The `'t` parameter brands each position with the borrow
    /// of the tree it came from, so positions cannot outlive their tree, cross between trees of
    /// different lifetimes, or survive a mutation.
    type Position<'t>: Position<Elem = Self::Elem> + Copy
    where
        Self: 't;

    /// Returns the unique root position, or [`None`] if the tree holds no elements. An empty tree
    /// is not an error.
    fn root(&self) -> Option<Self::Position<'_>>;

    /// Returns the parent of `pos`, or [`None`] if `pos` is the root.
    fn parent<'t>(&'t self, pos: &Self::Position<'t>) -> Option<Self::Position<'t>>;

    /// Returns the number of children of `pos`. Always equal to the count produced by iterating
    /// [`children`](Tree::children).
    fn num_children<'t>(&'t self, pos: &Self::Position<'t>) -> usize;

    /// Returns a lazy, finite iterator over the children of `pos`, in whatever order the concrete
    /// structure defines. Each call produces a fresh iterator.
    fn children<'t>(&'t self, pos: &Self::Position<'t>) -> impl Iterator<Item = Self::Position<'t>>;

    /// Returns the total number of elements in the tree.
    fn size(&self) -> usize;

    /// Returns true if `pos` is the root of this tree.
    fn is_root<'t>(&'t self, pos: &Self::Position<'t>) -> bool {
        self.root().is_some_and(|root| root == *pos)
    }

    /// Returns true if `pos` has no children.
    fn is_leaf<'t>(&'t self, pos: &Self::Position<'t>) -> bool {
        self.num_children(pos) == 0
    }

    /// Returns true if the tree holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of edges between `pos` and the root: 0 for the root itself, otherwise
    /// one more than the depth of the parent.
    ///
    /// Runs in time proportional to the depth, which for a degenerate single-chain tree can be
    /// the size of the whole tree.
    fn depth<'t>(&'t self, pos: &Self::Position<'t>) -> usize {
        match self.parent(pos) {
            Some(parent) => 1 + self.depth(&parent),
            None => 0,
        }
    }

    /// Returns the height of the whole tree: the maximum depth among its leaves, or 0 for an
    /// empty tree. Equivalent to [`height_of`](Tree::height_of) at the root.
    fn height(&self) -> usize {
        match self.root() {
            Some(root) => self.height_of(&root),
            None => 0,
        }
    }

    /// Returns the height of the subtree below `pos`, computed bottom-up: 0 for a leaf, otherwise
    /// one more than the tallest child. Visits each node in the subtree once, so calling this at
    /// the root is `O(n)`.
    fn height_of<'t>(&'t self, pos: &Self::Position<'t>) -> usize {
        self.children(pos)
            .map(|child| self.height_of(&child))
            .max()
            .map_or(0, |below| below + 1)
    }

    /// Returns the height of the whole tree straight from its definition: the maximum over all
    /// leaf positions of [`depth`](Tree::depth).
    ///
    /// This recomputes the depth of every leaf from scratch, so it is deliberately slower than
    /// [`height`](Tree::height) (quadratic on a degenerate chain). It exists as a readable
    /// reference the efficient version can be checked against.
    fn height_by_depth(&self) -> usize {
        match self.root() {
            Some(root) => self.deepest_leaf_depth(&root),
            None => 0,
        }
    }

    /// Returns the maximum depth among the leaves of the subtree below `pos`. This is the
    /// recursive worker behind [`height_by_depth`](Tree::height_by_depth).
    fn deepest_leaf_depth<'t>(&'t self, pos: &Self::Position<'t>) -> usize {
        if self.is_leaf(pos) {
            self.depth(pos)
        } else {
            self.children(pos)
                .map(|child| self.deepest_leaf_depth(&child))
                .max()
                .unwrap_or(0)
        }
    }
}
