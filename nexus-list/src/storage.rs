//! Node storage: the allocate/release facility a list calls into.
//!
//! A list never allocates nodes itself. It asks a [`Storage`] for a slot,
//! receives a stable index, and hands the slot back when the node is
//! erased. Indices stay valid until released, so links between nodes are
//! indices rather than pointers.

use crate::Index;

/// Slab-like storage with stable indices.
///
/// # Requirements
///
/// - **Stable indices**: an index names the same value until it is removed.
/// - **Slot reuse**: removed slots may be handed out again by `insert`.
/// - **O(1)** `insert`, `remove`, `get`.
///
/// # Safety
///
/// Implementors must hand out disjoint values for distinct occupied
/// indices: `get_mut(a)` and `get_mut(b)` with `a != b` never alias.
/// Mutable list iteration relies on this to yield several `&mut T` at once.
///
/// # Implementations
///
/// - `slab::Slab<T>` - growable, the default backing for lists
pub unsafe trait Storage<T> {
    /// Index type for this storage.
    type Index: Index;

    /// Stores `value`, returning its slot index.
    fn insert(&mut self, value: T) -> Self::Index;

    /// Releases the slot at `index`, returning its value if it was occupied.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Returns a reference to the value at `index`, if occupied.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if occupied.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Safety: slab entries live in distinct `Vec` elements.
unsafe impl<T> Storage<T> for slab::Slab<T> {
    type Index = usize;

    #[inline]
    fn insert(&mut self, value: T) -> Self::Index {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, index: Self::Index) -> Option<T> {
        self.try_remove(index)
    }

    #[inline]
    fn get(&self, index: Self::Index) -> Option<&T> {
        slab::Slab::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
        slab::Slab::get_mut(self, index)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }
}
