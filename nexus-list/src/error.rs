// nexus-list/src/error.rs

//! Error types for list and cursor operations.

use core::fmt;

/// Failure of a list or cursor operation.
///
/// Every fallible operation reports one of these before touching the list,
/// so a returned error means the list is exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// The cursor is unattached, belongs to another list, names a node
    /// that has since been erased, names a sentinel where an element is
    /// required, or would move past either end.
    InvalidIterator,
    /// An element was requested from, or removed from, an empty list.
    EmptyContainer,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::InvalidIterator => write!(f, "invalid iterator"),
            ListError::EmptyContainer => write!(f, "container is empty"),
        }
    }
}

impl std::error::Error for ListError {}
