#![cfg(test)]

use super::error::{CursorError, Detached, SlotOccupied};
use super::*;
use crate::collections::tree::{BinaryTree, Position, Tree};
use crate::util::alloc::CountedDrop;

/// Builds the four-node tree: root R, left child L (leaf), right child M with one left child N.
fn sample_tree() -> LinkedBinaryTree<char> {
    let mut tree = LinkedBinaryTree::new();
    let mut cursor = tree.cursor_mut();
    cursor.insert_root('R').expect("tree starts empty");
    cursor.insert_left('L').expect("R has no children yet");
    cursor.insert_right('M').expect("R has no right child yet");
    cursor
        .move_right()
        .insert_left('N')
        .expect("M has no children yet");
    tree
}

#[test]
fn test_sample_tree_queries() {
    let tree = sample_tree();
    assert_eq!(tree.size(), 4);

    let root = tree.root().expect("tree is not empty");
    let left = tree.left(&root).expect("R has a left child");
    let mid = tree.right(&root).expect("R has a right child");
    let deep = tree.left(&mid).expect("M has a left child");

    assert_eq!(root.element(), &'R');
    assert_eq!(left.element(), &'L');
    assert_eq!(mid.element(), &'M');
    assert_eq!(deep.element(), &'N');

    assert!(tree.is_root(&root));
    assert!(!tree.is_root(&left));
    assert!(tree.is_leaf(&left), "L has no children.");
    assert!(tree.is_leaf(&deep), "N has no children.");
    assert!(!tree.is_leaf(&mid), "M has a child.");

    assert_eq!(tree.depth(&root), 0);
    assert_eq!(tree.depth(&mid), 1);
    assert_eq!(tree.depth(&deep), 2);

    assert_eq!(tree.height(), 2);
    assert_eq!(tree.height_of(&root), 2);
    assert_eq!(tree.height_of(&mid), 1);
    assert_eq!(tree.height_of(&left), 0, "The height of a leaf is 0.");

    assert_eq!(tree.parent(&deep), Some(mid), "N's parent is M.");
    assert_eq!(tree.parent(&root), None, "The root has no parent.");
}

#[test]
fn test_sibling() {
    let tree = sample_tree();
    let root = tree.root().expect("tree is not empty");
    let left = tree.left(&root).expect("R has a left child");
    let mid = tree.right(&root).expect("R has a right child");
    let deep = tree.left(&mid).expect("M has a left child");

    assert_eq!(tree.sibling(&left), Some(mid), "L's sibling is M.");
    assert_eq!(tree.sibling(&mid), Some(left), "M's sibling is L.");
    assert_eq!(
        tree.sibling(&deep),
        None,
        "N has no sibling because M has no right child."
    );
    assert_eq!(tree.sibling(&root), None, "The root has no sibling.");
}

#[test]
fn test_children_order_and_count() {
    let tree = sample_tree();
    let root = tree.root().expect("tree is not empty");
    let mid = tree.right(&root).expect("R has a right child");

    let mut elements = tree.children(&root).map(|child| *child.element());
    assert_eq!(elements.next(), Some('L'), "Children should yield left before right.");
    assert_eq!(elements.next(), Some('M'));
    assert_eq!(elements.next(), None);

    for pos in [root, mid] {
        assert_eq!(
            tree.children(&pos).count(),
            tree.num_children(&pos),
            "num_children should agree with the children iterator."
        );
    }

    let deep = tree.left(&mid).expect("M has a left child");
    assert_eq!(
        tree.children(&deep).count(),
        0,
        "A leaf should yield an empty children iterator."
    );

    // Each call produces a fresh iterator; an exhausted one doesn't affect the next.
    let mut first = tree.children(&root);
    first.by_ref().for_each(drop);
    assert_eq!(first.next(), None);
    assert_eq!(tree.children(&root).count(), 2);
}

#[test]
fn test_position_equality() {
    let tree = sample_tree();
    let root = tree.root().expect("tree is not empty");

    assert_eq!(
        tree.root(),
        Some(root),
        "Two lookups of the same node should compare equal."
    );

    let left = tree.left(&root).expect("R has a left child");
    let via_parent = tree
        .parent(&left)
        .and_then(|parent| tree.left(&parent))
        .expect("L is reachable back through its parent");
    assert_eq!(left, via_parent);

    let mid = tree.right(&root).expect("R has a right child");
    assert_ne!(
        left, mid,
        "Positions of different nodes should compare unequal."
    );
}

#[test]
fn test_height_oracle_agreement() {
    // The definition-based height (max leaf depth) validates the efficient bottom-up one.
    let shapes = [
        sample_tree(),
        LinkedBinaryTree::new(),
        {
            let mut tree = LinkedBinaryTree::new();
            tree.cursor_mut().insert_root('a').expect("tree starts empty");
            tree
        },
        {
            // A degenerate left chain.
            let mut tree = LinkedBinaryTree::new();
            let mut cursor = tree.cursor_mut();
            cursor.insert_root('a').expect("tree starts empty");
            for _ in 0..9 {
                cursor
                    .insert_left('a')
                    .expect("the cursor is always on the current leaf");
                cursor.move_left();
            }
            tree
        },
        {
            // Full two levels, one extra node on the third.
            let mut tree = LinkedBinaryTree::new();
            let mut cursor = tree.cursor_mut();
            cursor.insert_root('a').expect("tree starts empty");
            cursor.insert_left('b').expect("empty left slot");
            cursor.insert_right('c').expect("empty right slot");
            cursor.move_left();
            cursor.insert_left('d').expect("empty left slot");
            cursor.insert_right('e').expect("empty right slot");
            cursor.move_right();
            cursor.insert_right('f').expect("empty right slot");
            tree
        },
    ];

    for (index, tree) in shapes.iter().enumerate() {
        assert_eq!(
            tree.height(),
            tree.height_by_depth(),
            "Both height algorithms should agree on shape {index}."
        );
    }

    assert_eq!(shapes[3].height(), 9, "A 10-node chain has height 9.");
    assert_eq!(shapes[4].height(), 3);
}

#[test]
fn test_empty_tree() {
    let tree: LinkedBinaryTree<u8> = LinkedBinaryTree::new();

    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(
        tree.root(),
        None,
        "An empty tree should report no root rather than fail."
    );
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.height_by_depth(), 0);

    let mut tree = tree;
    tree.cursor_mut().insert_root(1).expect("tree starts empty");
    assert!(!tree.is_empty());
    assert_eq!(tree.size(), 1);

    let root = tree.root().expect("root was just inserted");
    assert!(tree.is_root(&root));
    assert!(tree.is_leaf(&root), "A lone root is also a leaf.");
    assert_eq!(tree.height(), 0, "A single-node tree has height 0.");
}

#[test]
fn test_cursor_movement_and_reads() {
    let mut tree = sample_tree();
    let mut cursor = tree.cursor_mut();

    assert_eq!(cursor.read(), Some(&'R'), "The cursor starts at the root.");
    assert_eq!(
        cursor.move_left().read(),
        Some(&'L'),
        "move_left should descend to the left child."
    );
    assert_eq!(
        cursor.move_left().read(),
        Some(&'L'),
        "Moving toward an absent child should saturate."
    );
    assert_eq!(cursor.move_up().move_right().read(), Some(&'M'));
    assert_eq!(
        cursor.move_up().move_up().read(),
        Some(&'R'),
        "move_up should saturate at the root."
    );

    *cursor.move_right().move_left().read_mut().expect("cursor is on N") = 'n';
    drop(cursor);

    let root = tree.root().expect("tree is not empty");
    let mid = tree.right(&root).expect("R has a right child");
    let deep = tree.left(&mid).expect("M has a left child");
    assert_eq!(deep.element(), &'n', "read_mut should have written through.");
}

#[test]
fn test_cursor_errors() {
    let mut tree = LinkedBinaryTree::new();
    let mut cursor = tree.cursor_mut();

    assert!(cursor.is_detached());
    assert_eq!(cursor.read(), None);

    let error = cursor.insert_left('x').err();
    assert_eq!(
        error,
        Some(CursorError::Detached(Detached)),
        "Inserting a child with no current node should fail."
    );
    assert!(error.is_some_and(|e| e.is_detached()));

    cursor.insert_root('a').expect("tree starts empty");
    assert_eq!(
        cursor.insert_root('b').err(),
        Some(SlotOccupied),
        "A second root should be rejected."
    );

    cursor.insert_left('c').expect("empty left slot");
    let error = cursor.insert_left('d').err();
    assert_eq!(error, Some(CursorError::SlotOccupied(SlotOccupied)));
    let inner: Option<SlotOccupied> = error.expect("error is present").try_into().ok();
    assert_eq!(inner, Some(SlotOccupied));

    assert_eq!(tree.size(), 2, "Failed insertions should not change the size.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut tree = LinkedBinaryTree::new();
    let mut cursor = tree.cursor_mut();
    cursor.insert_root(counter.clone()).expect("tree starts empty");
    cursor.insert_left(counter.clone()).expect("empty left slot");
    cursor.insert_right(counter.clone()).expect("empty right slot");
    cursor.move_right();
    cursor.insert_left(counter.clone()).expect("empty left slot");
    drop(cursor);

    assert_eq!(tree.size(), 4);
    drop(tree);
    assert_eq!(counter.take(), 4, "Every node's element should be dropped with the tree.");
}

#[test]
fn test_drop_deep_chain() {
    let counter = CountedDrop::new(0);
    let mut tree = LinkedBinaryTree::new();
    let mut cursor = tree.cursor_mut();
    cursor.insert_root(counter.clone()).expect("tree starts empty");
    for _ in 0..100_000 {
        cursor.insert_left(counter.clone()).expect("empty left slot");
        cursor.move_left();
    }
    drop(cursor);

    // A chain this long would blow the stack if dropping descended one call frame per node.
    drop(tree);
    assert_eq!(
        counter.take(),
        100_001,
        "Every node of the chain should be dropped with the tree."
    );
}
