use super::node::{NodeId, Nodes, Side};
use super::{SearchResult, TreeIter, Visit};
use crate::error::{InsertError, TreeError};
use crate::{Comparator, Destructor, DropElement, NaturalOrder};
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set of elements kept in a red-black tree.
///
/// Elements are ordered by the comparator `C` and, once inserted, owned by the
/// tree until it is torn down: then each one is handed to the destructor `D`
/// exactly once. Two elements comparing equal are never stored together
pub struct RBTree<T, C = NaturalOrder, D = DropElement>
where
    C: Comparator<T>,
    D: Destructor<T>,
{
    pub(crate) nodes: Nodes<T>,
    comparator: C,
    destructor: D,
}

impl<T: Ord> RBTree<T> {
    /// Create an empty tree using the natural order of the elements
    pub fn new() -> Self {
        RBTree::with_functions(NaturalOrder, DropElement)
    }
}

impl<T: Ord> Default for RBTree<T> {
    fn default() -> Self {
        RBTree::new()
    }
}

impl<T, C, D> RBTree<T, C, D>
where
    C: Comparator<T>,
    D: Destructor<T>,
{
    /// Create an empty tree ordered by `comparator`, whose elements will be
    /// released through `destructor`
    pub fn with_functions(comparator: C, destructor: D) -> Self {
        RBTree {
            nodes: Nodes::new(),
            comparator,
            destructor,
        }
    }

    /// Like `with_functions`, for callers that may not have both functions at hand.
    /// A tree cannot operate without either of them
    pub fn try_from_functions(
        comparator: Option<C>,
        destructor: Option<D>,
    ) -> Result<Self, TreeError> {
        match (comparator, destructor) {
            (None, _) => Err(TreeError::InvalidArgument("comparator")),
            (_, None) => Err(TreeError::InvalidArgument("destructor")),
            (Some(comparator), Some(destructor)) => {
                Ok(RBTree::with_functions(comparator, destructor))
            }
        }
    }

    /// Return the number of stored elements
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.root().is_none()
    }

    /// Return the number of nodes in the longest path from the root to a leaf.
    /// It never exceeds `2 * log2(len + 1)`
    pub fn height(&self) -> usize {
        self.nodes.height()
    }

    /// Insert a new element.
    ///
    /// If an element comparing equal is already stored, nothing changes and the
    /// new element is handed back inside the error. Same thing if the node
    /// storage cannot grow
    pub fn insert(&mut self, element: T) -> Result<(), InsertError<T>> {
        let (parent, side) = match self.search(&element) {
            SearchResult::Found(_) => {
                debug!("rejecting duplicate element ({} stored)", self.len());
                return Err(InsertError::Duplicate(element));
            }
            SearchResult::Vacant { parent, side } => (parent, side),
        };

        let id = self.nodes.attach(element, parent, side)?;
        self.nodes.fixup(id);
        Ok(())
    }

    /// Return whether an element comparing equal to `element` is stored
    pub fn contains(&self, element: &T) -> bool {
        match self.search(element) {
            SearchResult::Found(_) => true,
            SearchResult::Vacant { .. } => false,
        }
    }

    /// Return the stored element comparing equal to `element`, if any
    pub fn get(&self, element: &T) -> Option<&T> {
        match self.search(element) {
            SearchResult::Found(id) => Some(self.nodes.element(id)),
            SearchResult::Vacant { .. } => None,
        }
    }

    /// Return the smallest element
    pub fn first(&self) -> Option<&T> {
        self.edge(Side::Left)
    }

    /// Return the largest element
    pub fn last(&self) -> Option<&T> {
        self.edge(Side::Right)
    }

    /// Return a sorted iterator over references to the elements
    pub fn iter(&self) -> TreeIter<T> {
        TreeIter::new(&self.nodes)
    }

    /// Call `visitor` on every element, in ascending order.
    ///
    /// As soon as the visitor returns `Visit::Stop` the traversal ends and
    /// `Visit::Stop` is returned. Otherwise, the result of the last call is
    /// returned. Fails on an empty tree
    pub fn for_each<F>(&self, mut visitor: F) -> Result<Visit, TreeError>
    where
        F: FnMut(&T) -> Visit,
    {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }

        let mut last = Visit::Continue;
        for element in self.iter() {
            last = visitor(element);
            if last == Visit::Stop {
                break;
            }
        }
        Ok(last)
    }

    /// Release every element through the destructor, then the tree itself
    pub fn destroy(mut self) {
        self.release();
    }

    /// Release every element through the destructor, leaving an empty tree
    pub fn clear(&mut self) {
        self.release();
    }

    /// Walk from the root towards `element`
    fn search(&self, element: &T) -> SearchResult {
        let mut current = match self.nodes.root() {
            Some(root) => root,
            None => {
                return SearchResult::Vacant {
                    parent: None,
                    side: Side::Left,
                }
            }
        };

        loop {
            let side = match self.comparator.compare(self.nodes.element(current), element) {
                Ordering::Equal => return SearchResult::Found(current),
                Ordering::Greater => Side::Left,
                Ordering::Less => Side::Right,
            };
            match self.nodes.child(current, side) {
                Some(child) => current = child,
                None => {
                    return SearchResult::Vacant {
                        parent: Some(current),
                        side,
                    }
                }
            }
        }
    }

    /// Follow `side` links from the root down to the last node
    fn edge(&self, side: Side) -> Option<&T> {
        let mut current: NodeId = self.nodes.root()?;
        while let Some(child) = self.nodes.child(current, side) {
            current = child;
        }
        Some(self.nodes.element(current))
    }

    fn release(&mut self) {
        let destructor = &mut self.destructor;
        let released = self.nodes.drain_post_order(|element| destructor.destroy(element));
        if released > 0 {
            debug!("released {} elements", released);
        }
    }
}

impl<T, C, D> Drop for RBTree<T, C, D>
where
    C: Comparator<T>,
    D: Destructor<T>,
{
    fn drop(&mut self) {
        self.release();
    }
}

impl<T, C, D> fmt::Debug for RBTree<T, C, D>
where
    T: fmt::Debug,
    C: Comparator<T>,
    D: Destructor<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C, D> IntoIterator for &'a RBTree<T, C, D>
where
    C: Comparator<T>,
    D: Destructor<T>,
{
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C, D> Extend<T> for RBTree<T, C, D>
where
    C: Comparator<T>,
    D: Destructor<T>,
{
    /// Insert every element. Duplicates are dropped without reaching the destructor
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if let Err(error) = self.insert(element) {
                drop(error.into_element());
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for RBTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RBTree::new();
        tree.extend(iter);
        tree
    }
}
