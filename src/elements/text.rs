use crate::error::TreeError;
use crate::rbtree::{RBTree, Visit};
use crate::{Comparator, Destructor};

/// Join every stored string in ascending order, each one followed by a line break.
/// An empty string still takes a line of its own, so the output always holds
/// one line per stored string
pub fn concatenate<S, C, D>(tree: &RBTree<S, C, D>) -> Result<String, TreeError>
where
    S: AsRef<str>,
    C: Comparator<S>,
    D: Destructor<S>,
{
    let mut concatenated = String::new();
    tree.for_each(|word| {
        concatenated.push_str(word.as_ref());
        concatenated.push('\n');
        Visit::Continue
    })?;
    Ok(concatenated)
}
