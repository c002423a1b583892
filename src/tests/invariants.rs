use crate::rbtree::{Color, NodeId, Nodes, Side};
use crate::{Comparator, Destructor, RBTree};
use std::cmp::Ordering;

/// Check every red-black and search-tree invariant, panicking on the first
/// violation. Return the black height of the tree (absent children count as one)
pub(crate) fn check_invariants<T, C, D>(tree: &RBTree<T, C, D>, comparator: &C) -> usize
where
    C: Comparator<T>,
    D: Destructor<T>,
{
    let nodes = &tree.nodes;
    if let Some(root) = nodes.root() {
        assert_eq!(nodes.color(root), Color::Black, "red root");
        assert_eq!(nodes.parent(root), None, "root with a parent");
    }

    let elements: Vec<&T> = tree.iter().collect();
    assert_eq!(elements.len(), tree.len());
    for pair in elements.windows(2) {
        assert_eq!(
            comparator.compare(pair[0], pair[1]),
            Ordering::Less,
            "traversal out of order"
        );
    }

    black_height(nodes, nodes.root())
}

fn black_height<T>(nodes: &Nodes<T>, id: Option<NodeId>) -> usize {
    let id = match id {
        Some(id) => id,
        None => return 1,
    };

    let left = nodes.child(id, Side::Left);
    let right = nodes.child(id, Side::Right);
    for child in [left, right].iter().flatten() {
        assert_eq!(nodes.parent(*child), Some(id), "broken parent link");
    }

    let color = nodes.color(id);
    if color == Color::Red {
        assert!(
            nodes.red(left).is_none() && nodes.red(right).is_none(),
            "red node with a red child"
        );
    }

    let left_height = black_height(nodes, left);
    let right_height = black_height(nodes, right);
    assert_eq!(left_height, right_height, "uneven black height");
    match color {
        Color::Black => left_height + 1,
        Color::Red => left_height,
    }
}

/// Maximum height allowed for a red-black tree with `len` nodes
pub(crate) fn height_bound(len: usize) -> usize {
    (2. * ((len + 1) as f64).log2()).floor() as usize
}

#[test]
fn detects_uneven_black_height() {
    let mut tree: RBTree<u32> = RBTree::new();
    tree.insert(2).unwrap();
    tree.insert(1).unwrap();
    let child = tree.nodes.root().and_then(|root| tree.nodes.child(root, Side::Left));
    tree.nodes.set_color(child.unwrap(), Color::Black);

    let result = std::panic::catch_unwind(|| check_invariants(&tree, &crate::NaturalOrder));
    assert!(result.is_err());
}

#[test]
fn height_bounds() {
    assert_eq!(height_bound(0), 0);
    assert_eq!(height_bound(1), 2);
    assert_eq!(height_bound(3), 4);
    assert_eq!(height_bound(1000), 19);
}
