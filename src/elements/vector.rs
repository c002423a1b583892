use crate::rbtree::{RBTree, Visit};
use crate::{Comparator, Destructor};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// A vector of real components.
///
/// Vectors are ordered component by component: the first differing component
/// decides. When one vector is a prefix of the other, the shorter one is smaller.
/// Components are compared with a total order, so NaN is accepted and sorts last
#[derive(Debug, Clone, Default)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    pub fn new(components: Vec<f64>) -> Self {
        Vector { components }
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Return the euclidean (L2) norm
    pub fn norm(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Three-way comparison, usable directly as a tree comparator
    pub fn compare(a: &Vector, b: &Vector) -> Ordering {
        let a = a.components.iter().map(|&c| OrderedFloat(c));
        let b = b.components.iter().map(|&c| OrderedFloat(c));
        a.cmp(b)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Vector::new(components)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        Vector::compare(self, other) == Ordering::Equal
    }
}

impl Eq for Vector {}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vector {
    fn cmp(&self, other: &Self) -> Ordering {
        Vector::compare(self, other)
    }
}

/// Return a copy of the stored vector with the largest norm.
/// Zero-length vectors and vectors with a NaN norm are ignored; among equal
/// norms the smallest vector wins.
/// Return `None` if no vector qualifies
pub fn find_max_norm<C, D>(tree: &RBTree<Vector, C, D>) -> Option<Vector>
where
    C: Comparator<Vector>,
    D: Destructor<Vector>,
{
    let mut max: Option<(f64, Vector)> = None;
    tree.for_each(|vector| {
        if !vector.is_empty() {
            let norm = vector.norm();
            // A NaN norm compares false against everything, so it never wins
            let larger = match &max {
                Some((max_norm, _)) => norm > *max_norm,
                None => !norm.is_nan(),
            };
            if larger {
                max = Some((norm, vector.clone()));
            }
        }
        Visit::Continue
    })
    .ok()?;
    max.map(|(_, vector)| vector)
}
