//! Element types commonly stored in a tree, with the functions a tree
//! needs to order them and the traversals built on top of them
pub mod text;
pub mod vector;

pub use text::concatenate;
pub use vector::{find_max_norm, Vector};
