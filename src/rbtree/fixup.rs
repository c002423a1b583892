//! Rebalancing after insertion.
//! A freshly linked node is red; the only invariant it can break is "no red
//! node has a red parent". The violation is either pushed up by recoloring or
//! removed by at most two rotations
use super::node::{Color, NodeId, Nodes, Side};
use log::trace;

impl<T> Nodes<T> {
    /// Rotate the subtree rooted at `top` towards `direction`.
    /// The child of `top` on the opposite side rises to take its place and
    /// the in-order sequence of the subtree is preserved.
    /// Return the new top of the subtree
    pub(crate) fn rotate(&mut self, top: NodeId, direction: Side) -> NodeId {
        let pivot = match self.child(top, direction.opposite()) {
            Some(pivot) => pivot,
            None => {
                debug_assert!(false, "rotation without a pivot");
                return top;
            }
        };

        // The inner subtree of the pivot changes hands
        let inner = self.child(pivot, direction);
        self.set_child(top, direction.opposite(), inner);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(top));
        }

        let parent = self.parent(top);
        self.replace_child(parent, top, pivot);
        self.set_child(pivot, direction, Some(top));
        self.set_parent(top, Some(pivot));
        pivot
    }

    /// Restore the red-black invariants after the red node `node` was linked,
    /// or after it was recolored red by a previous step
    pub(crate) fn fixup(&mut self, node: NodeId) {
        let parent = match self.parent(node) {
            Some(parent) => parent,
            None => {
                self.set_color(node, Color::Black);
                return;
            }
        };
        if self.color(parent) == Color::Black {
            return;
        }

        // A red parent is never the root
        let grandparent = match self.parent(parent) {
            Some(grandparent) => grandparent,
            None => {
                self.set_color(parent, Color::Black);
                return;
            }
        };
        let parent_side = self.side_of(grandparent, parent);
        let uncle = self.child(grandparent, parent_side.opposite());

        if let Some(uncle) = self.red(uncle) {
            trace!("red uncle: recoloring and moving up");
            self.set_color(parent, Color::Black);
            self.set_color(uncle, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.fixup(grandparent)
        } else if self.side_of(parent, node) != parent_side {
            trace!("zig-zag: restructuring before rotation");
            self.rotate(parent, parent_side);
            // `parent` is now the outer child of `node`
            self.rotate_line(parent, node, grandparent, parent_side)
        } else {
            self.rotate_line(node, parent, grandparent, parent_side)
        }
    }

    /// Fix a red `node` under a red `parent` that lie on a straight line
    /// going down towards `side` from a black `grandparent` with a black uncle
    fn rotate_line(&mut self, node: NodeId, parent: NodeId, grandparent: NodeId, side: Side) {
        debug_assert_eq!(self.side_of(parent, node), side);
        debug_assert_eq!(self.side_of(grandparent, parent), side);
        trace!("straight line: rotating the grandparent");

        let top = self.rotate(grandparent, side.opposite());
        self.set_color(top, Color::Black);
        self.set_color(grandparent, Color::Red);
    }
}
