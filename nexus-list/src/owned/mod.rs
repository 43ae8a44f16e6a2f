//! Convenience wrapper that owns its storage.
//!
//! [`OwnedList`] combines a [`List`](crate::List) with its own slab,
//! providing a simpler API for cases where you don't need to share storage
//! across multiple lists.
//!
//! # When to use the owned variant
//!
//! Use [`OwnedList`] when:
//! - You have a single list (not many lists sharing one pool)
//! - You want value semantics: `Clone`, `==`, `Debug`, `collect()`
//! - You don't pass `&mut storage` around anyway
//!
//! # When to use the raw variant
//!
//! Use [`List`](crate::List) with external storage when:
//! - Multiple lists share one storage pool (e.g., one list per bucket)
//! - You merge lists and want nodes relinked rather than moved
//! - You want control over the storage type or index width
//!
//! # Example
//!
//! ```
//! use nexus_list::OwnedList;
//!
//! let mut queue: OwnedList<u64> = OwnedList::with_capacity(100);
//! queue.push_back(1);
//! queue.push_back(2);
//! assert_eq!(queue.pop_front(), Ok(1));
//!
//! let mut other: OwnedList<u64> = [0, 3].into_iter().collect();
//! queue.merge(&mut other);
//! assert_eq!(format!("{queue:?}"), "[0, 2, 3]");
//! ```

mod list;

pub use list::{IntoIter, OwnedList};
