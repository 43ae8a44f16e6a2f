//! List nodes.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::Index;

static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

/// Mints a process-unique node stamp.
#[inline]
pub(crate) fn next_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

/// A node in the linked list.
///
/// Wraps an element with its `prev`/`next` links and an identity stamp.
/// Sentinel nodes carry no element. Users reach elements through the list
/// and its cursors; the node is exposed only so storage types can name it
/// (e.g. `slab::Slab<Node<T>>`).
#[derive(Debug)]
pub struct Node<T, Idx: Index = usize> {
    pub(crate) value: Option<T>,
    pub(crate) prev: Idx,
    pub(crate) next: Idx,
    pub(crate) stamp: u64,
}

impl<T, Idx: Index> Node<T, Idx> {
    /// Creates an unlinked node holding `value`.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value: Some(value),
            prev: Idx::NONE,
            next: Idx::NONE,
            stamp: next_stamp(),
        }
    }

    /// Creates an unlinked boundary node.
    #[inline]
    pub(crate) fn sentinel() -> Self {
        Self {
            value: None,
            prev: Idx::NONE,
            next: Idx::NONE,
            stamp: next_stamp(),
        }
    }

    /// Returns the element, or `None` for a sentinel.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns `true` for head/tail boundary nodes.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.value.is_none()
    }
}
