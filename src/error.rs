/// Errors reported by tree operations.
/// All of them are local and recoverable: a failed operation leaves the tree untouched
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A function required to operate the tree was not supplied
    #[error("invalid argument: missing {0}")]
    InvalidArgument(&'static str),
    /// An element comparing equal is already stored
    #[error("element already present in the tree")]
    Duplicate,
    /// The operation needs at least one stored element
    #[error("the tree holds no elements")]
    EmptyTree,
    /// Growing the node storage failed
    #[error("failed to allocate a tree node")]
    OutOfMemory,
}

/// Rejected insertion. The element is handed back to the caller, who still owns it
#[derive(Debug, thiserror::Error)]
pub enum InsertError<T> {
    #[error("element already present in the tree")]
    Duplicate(T),
    #[error("failed to allocate a tree node")]
    OutOfMemory(T),
}

impl<T> InsertError<T> {
    /// Recover the element that was not inserted
    pub fn into_element(self) -> T {
        match self {
            InsertError::Duplicate(element) | InsertError::OutOfMemory(element) => element,
        }
    }

    pub fn kind(&self) -> TreeError {
        match self {
            InsertError::Duplicate(_) => TreeError::Duplicate,
            InsertError::OutOfMemory(_) => TreeError::OutOfMemory,
        }
    }
}

impl<T> From<InsertError<T>> for TreeError {
    fn from(error: InsertError<T>) -> Self {
        error.kind()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejected_element_is_returned() {
        let error = InsertError::Duplicate(String::from("pi"));
        assert_eq!(error.kind(), TreeError::Duplicate);
        assert_eq!(error.to_string(), "element already present in the tree");
        assert_eq!(error.into_element(), "pi");
    }

    #[test]
    fn messages() {
        assert_eq!(
            TreeError::InvalidArgument("comparator").to_string(),
            "invalid argument: missing comparator"
        );
        assert_eq!(
            TreeError::from(InsertError::OutOfMemory(17)),
            TreeError::OutOfMemory
        );
    }
}
