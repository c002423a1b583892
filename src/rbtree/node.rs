use crate::error::InsertError;
use std::mem;

/// Position of a node inside the arena
pub(crate) type NodeId = usize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

struct Node<T> {
    element: T,
    color: Color,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Arena holding every node of a tree.
/// Links are plain indices, so a node never owns another node: the arena owns them all
pub(crate) struct Nodes<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Nodes<T> {
    pub(crate) fn new() -> Self {
        Nodes {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Return the number of nodes, which is also the number of stored elements
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn element(&self, id: NodeId) -> &T {
        &self.nodes[id].element
    }

    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.nodes[id].color
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id].color = color;
    }

    /// Return the node if it is red. Absent nodes count as black
    pub(crate) fn red(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.filter(|&id| self.nodes[id].color == Color::Red)
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.nodes[id].parent = parent;
    }

    pub(crate) fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.nodes[id].left,
            Side::Right => self.nodes[id].right,
        }
    }

    /// Set one child link. The child's parent link is left to the caller
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.nodes[id].left = child,
            Side::Right => self.nodes[id].right = child,
        }
    }

    /// Return which child of `parent` the node `child` is
    pub(crate) fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.nodes[parent].left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.nodes[parent].right, Some(child));
            Side::Right
        }
    }

    /// Make `new` take the place `old` had under `parent`.
    /// With no parent, `new` becomes the root
    pub(crate) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            None => self.root = Some(new),
            Some(parent) => {
                let side = self.side_of(parent, old);
                self.set_child(parent, side, Some(new));
            }
        }
        self.nodes[new].parent = parent;
    }

    /// Allocate a new red node and link it at the given free position.
    /// On allocation failure nothing is linked and the element is handed back
    pub(crate) fn attach(
        &mut self,
        element: T,
        parent: Option<NodeId>,
        side: Side,
    ) -> Result<NodeId, InsertError<T>> {
        if self.nodes.try_reserve(1).is_err() {
            return Err(InsertError::OutOfMemory(element));
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            element,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(id),
            Some(parent) => {
                debug_assert!(self.child(parent, side).is_none());
                self.set_child(parent, side, Some(id));
            }
        }
        Ok(id)
    }

    /// Return the number of nodes in the longest path from the root to a leaf
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.iter().map(|&id| (id, 1)).collect();
        while let Some((id, depth)) = pending.pop() {
            height = height.max(depth);
            for child in [self.nodes[id].left, self.nodes[id].right].iter().flatten() {
                pending.push((*child, depth + 1));
            }
        }
        height
    }

    /// List every node with children before their parent.
    /// Walks with the parent links only, without recursion; the listing
    /// itself is the only allocation
    pub(crate) fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut current = match self.root {
            Some(root) => self.first_in_post_order(root),
            None => return order,
        };

        loop {
            order.push(current);
            let parent = match self.nodes[current].parent {
                Some(parent) => parent,
                None => break,
            };
            current = match self.nodes[parent].right {
                // Coming up from the left: the right subtree is next
                Some(right) if self.nodes[parent].left == Some(current) => {
                    self.first_in_post_order(right)
                }
                _ => parent,
            };
        }

        order
    }

    /// Descend to the first node of the post-order listing of this subtree
    fn first_in_post_order(&self, mut id: NodeId) -> NodeId {
        loop {
            let node = &self.nodes[id];
            match node.left.or(node.right) {
                Some(child) => id = child,
                None => return id,
            }
        }
    }

    /// Unlink every node and hand each element to `release`, children before
    /// parents. Return how many elements were released
    pub(crate) fn drain_post_order(&mut self, mut release: impl FnMut(T)) -> usize {
        let order = self.post_order();
        let mut elements: Vec<Option<T>> = mem::take(&mut self.nodes)
            .into_iter()
            .map(|node| Some(node.element))
            .collect();
        self.root = None;
        for id in order {
            if let Some(element) = elements[id].take() {
                release(element);
            }
        }
        elements.len()
    }
}
