use std::cmp::Ordering;

#[cfg(test)]
mod tests;

mod error;

pub mod elements;

pub mod rbtree;

#[cfg(feature = "key-generator")]
pub mod key_generator;

pub use error::{InsertError, TreeError};
pub use rbtree::{RBTree, TreeIter, Visit};

/// A three-way ordering over elements stored in a tree.
/// Must be a strict total order that never changes during the lifetime of the tree
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Release the resources owned by an element.
/// The tree calls it exactly once per stored element, when the tree is torn down
pub trait Destructor<T> {
    fn destroy(&mut self, element: T);
}

/// Order elements by their `Ord` implementation
#[derive(Debug, Default, Copy, Clone)]
pub struct NaturalOrder;

/// Release elements by simply dropping them
#[derive(Debug, Default, Copy, Clone)]
pub struct DropElement;

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Destructor<T> for F
where
    F: FnMut(T),
{
    fn destroy(&mut self, element: T) {
        self(element)
    }
}

impl<T> Destructor<T> for DropElement {
    fn destroy(&mut self, element: T) {
        drop(element)
    }
}
