//! Checked doubly-linked lists over external storage.
//!
//! This crate provides a sentinel-bounded doubly-linked list whose nodes
//! live in a storage pool rather than in individual allocations, and whose
//! positions are detached, validated cursors rather than borrowed
//! references. The key insight: separate storage from structure.
//!
//! # Design Philosophy
//!
//! A pointer-linked list ties element lifetime to the list and makes a
//! dangling position undefined behavior. This crate inverts the model:
//!
//! ```text
//! Storage (Slab)   - owns nodes, provides stable slot indices
//! List             - links slot indices, owns nothing
//! Cursor           - (list id, slot, stamp), checked on every use
//! ```
//!
//! Benefits:
//! - **Stable cursors**: Insert or erase anywhere without invalidating
//!   other cursors
//! - **Detected misuse**: Stale, foreign and past-the-end cursors yield
//!   [`ListError::InvalidIterator`] instead of reading freed memory
//! - **Relink-only algorithms**: `sort`, `merge` and `reverse` never
//!   allocate or release a node
//! - **Shared storage**: Multiple lists can draw from the same pool
//!
//! # Quick Start
//!
//! ```
//! use nexus_list::{List, ListError};
//!
//! // Storage owns the nodes
//! let mut storage = slab::Slab::with_capacity(1000);
//!
//! // List coordinates slot indices into storage
//! let mut list: List<u64> = List::new(&mut storage);
//!
//! // Push returns a cursor for O(1) access later
//! let it = list.push_back(&mut storage, 42);
//! assert_eq!(list.get(&storage, it), Ok(&42));
//!
//! // O(1) removal from anywhere
//! assert_eq!(list.remove(&mut storage, it), Ok(42));
//! assert_eq!(list.get(&storage, it), Err(ListError::InvalidIterator));
//! ```
//!
//! For a single list with value semantics use [`OwnedList`], which carries
//! its own slab:
//!
//! ```
//! use nexus_list::OwnedList;
//!
//! let mut list: OwnedList<i32> = [3, 1, 2, 2].into_iter().collect();
//! list.sort();
//! list.unique();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! ```
//!
//! # Critical Invariant: Same Storage Instance
//!
//! All operations on a [`List`] must use the storage it was created on.
//! This is the caller's responsibility (same discipline as the `slab`
//! crate). A mismatch is never undefined behavior: cursor validation
//! reports it as [`ListError::InvalidIterator`] and internal link lookups
//! panic.
//!
//! # Errors
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | [`ListError::InvalidIterator`] | unattached, foreign or stale cursor; dereferencing `end()`; moving past either end |
//! | [`ListError::EmptyContainer`] | `front`, `back`, `pop_*`, `erase` on an empty list |
//!
//! A failed operation leaves the list unchanged.
//!
//! # Storage
//!
//! [`Storage`] is implemented for `slab::Slab`. Custom pools (for example
//! one indexed by `u32` to halve link size) implement the trait and pick
//! a narrower [`Index`].

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod index;
pub mod list;
pub mod node;
pub mod owned;
pub mod sort;
pub mod storage;

pub use cursor::{ConstCursor, Cursor, Position, Traverse};
pub use error::ListError;
pub use index::Index;
pub use list::{Iter, IterMut, List};
pub use node::Node;
pub use owned::{IntoIter, OwnedList};
pub use storage::Storage;
