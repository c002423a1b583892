mod fixup;
mod node;
mod tree;
mod tree_iter;

pub use tree::RBTree;
pub use tree_iter::TreeIter;

pub(crate) use node::{NodeId, Side};
#[cfg(test)]
pub(crate) use node::{Color, Nodes};

// Upper bound on the number of nodes in any root-to-leaf path.
// A red-black tree with n nodes has height at most 2*log2(n+1), so this
// covers every tree addressable by a 64-bit index
const MAX_HEIGHT: usize = 128;

/// Tell a traversal whether to keep visiting elements
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Visit {
    Continue,
    Stop,
}

impl From<bool> for Visit {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Visit::Continue
        } else {
            Visit::Stop
        }
    }
}

/// Where a walk from the root ended
enum SearchResult {
    /// A node holding an element comparing equal
    Found(NodeId),
    /// The free position a new element would take.
    /// `parent` is `None` when the tree is empty
    Vacant { parent: Option<NodeId>, side: Side },
}
