use super::node::{NodeId, Nodes, Side};
use super::MAX_HEIGHT;
use arrayvec::ArrayVec;

/// Sorted iterator over references to the elements of a tree
pub struct TreeIter<'a, T> {
    nodes: &'a Nodes<T>,
    /// Nodes whose element and right subtree are still to be visited.
    /// Never deeper than the tree height
    stack: ArrayVec<[NodeId; MAX_HEIGHT]>,
    len: usize,
}

impl<'a, T> TreeIter<'a, T> {
    pub(super) fn new(nodes: &'a Nodes<T>) -> Self {
        let mut iter = TreeIter {
            nodes,
            stack: ArrayVec::new(),
            len: nodes.len(),
        };
        iter.push_all_left(nodes.root());
        iter
    }

    fn push_all_left(&mut self, mut next: Option<NodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.nodes.child(id, Side::Left);
        }
    }
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        self.push_all_left(nodes.child(id, Side::Right));
        self.len -= 1;
        Some(nodes.element(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for TreeIter<'a, T> {}
impl<'a, T> std::iter::FusedIterator for TreeIter<'a, T> {}
