//! Detached, checked list positions.
//!
//! A cursor is a small `Copy` value naming one node of one list: the
//! list's id, the node's slot index and the node's stamp. It does not
//! borrow the list, so cursors can be held across insertions and erasures
//! the way linked-list iterators usually are.
//!
//! Every list operation that consumes a cursor re-validates it:
//!
//! ```text
//! owner == list.id          else InvalidIterator  (foreign / unattached)
//! storage[node] occupied    else InvalidIterator  (erased)
//! storage[node].stamp == s  else InvalidIterator  (erased, slot reused)
//! ```
//!
//! Stamps are process-unique, so a stale cursor can never be mistaken for
//! a live one even after its slot has been handed to a new node.
//!
//! # Mutable vs read-only
//!
//! [`Cursor`] is handed out by `begin`/`end`/`insert`/`erase` and may be
//! used for mutable element access. [`ConstCursor`] is the read-only view:
//! it converts from a [`Cursor`], never the reverse.
//!
//! # Example
//!
//! ```
//! use nexus_list::{ConstCursor, ListError, OwnedList};
//!
//! let mut list: OwnedList<u32> = [1, 2, 3].into_iter().collect();
//!
//! let mut it = list.begin();
//! list.move_next(&mut it).unwrap();
//! assert_eq!(list.get(it), Ok(&2));
//!
//! *list.get_mut(it).unwrap() = 20;
//! let view: ConstCursor = it.into();
//! assert_eq!(list.get(view), Ok(&20));
//! assert!(view == it);
//!
//! list.erase(it).unwrap();
//! assert_eq!(list.move_next(&mut it), Err(ListError::InvalidIterator));
//! ```

use crate::Index;

/// The state shared by both cursor kinds.
///
/// Opaque to users; obtained through [`Traverse::position`].
#[derive(Debug, Clone, Copy)]
pub struct Position<Idx: Index = usize> {
    pub(crate) owner: u64,
    pub(crate) node: Idx,
    pub(crate) stamp: u64,
}

impl<Idx: Index> Position<Idx> {
    /// A position attached to nothing.
    pub(crate) const fn detached() -> Self {
        Self {
            owner: 0,
            node: Idx::NONE,
            stamp: 0,
        }
    }

    #[inline]
    pub(crate) fn new(owner: u64, node: Idx, stamp: u64) -> Self {
        Self { owner, node, stamp }
    }

    #[inline]
    pub(crate) fn is_attached(&self) -> bool {
        self.owner != 0 && self.node.is_some()
    }

    #[inline]
    fn same_node(&self, other: &Self) -> bool {
        self.node == other.node && self.stamp == other.stamp
    }
}

mod private {
    pub trait Sealed {}
}

/// Behaviour common to [`Cursor`] and [`ConstCursor`].
///
/// Lets list traversal and read access accept either kind. Sealed.
pub trait Traverse<Idx: Index>: private::Sealed + Copy {
    /// Returns the cursor's position.
    fn position(&self) -> Position<Idx>;

    #[doc(hidden)]
    fn set_position(&mut self, pos: Position<Idx>);

    /// Returns `true` if the cursor was handed out by some list.
    ///
    /// Says nothing about whether its node is still alive.
    #[inline]
    fn is_attached(&self) -> bool {
        self.position().is_attached()
    }
}

/// A position in a list permitting mutable element access.
///
/// Default-constructed cursors are unattached; every operation on them
/// fails with [`ListError::InvalidIterator`](crate::ListError::InvalidIterator).
#[derive(Debug, Clone, Copy)]
pub struct Cursor<Idx: Index = usize> {
    pos: Position<Idx>,
}

/// A read-only position in a list.
#[derive(Debug, Clone, Copy)]
pub struct ConstCursor<Idx: Index = usize> {
    pos: Position<Idx>,
}

impl<Idx: Index> Cursor<Idx> {
    #[inline]
    pub(crate) fn at(pos: Position<Idx>) -> Self {
        Self { pos }
    }
}

impl<Idx: Index> ConstCursor<Idx> {
    #[inline]
    pub(crate) fn at(pos: Position<Idx>) -> Self {
        Self { pos }
    }
}

impl<Idx: Index> Default for Cursor<Idx> {
    fn default() -> Self {
        Self::at(Position::detached())
    }
}

impl<Idx: Index> Default for ConstCursor<Idx> {
    fn default() -> Self {
        Self::at(Position::detached())
    }
}

impl<Idx: Index> private::Sealed for Cursor<Idx> {}
impl<Idx: Index> private::Sealed for ConstCursor<Idx> {}

impl<Idx: Index> Traverse<Idx> for Cursor<Idx> {
    #[inline]
    fn position(&self) -> Position<Idx> {
        self.pos
    }

    #[inline]
    fn set_position(&mut self, pos: Position<Idx>) {
        self.pos = pos;
    }
}

impl<Idx: Index> Traverse<Idx> for ConstCursor<Idx> {
    #[inline]
    fn position(&self) -> Position<Idx> {
        self.pos
    }

    #[inline]
    fn set_position(&mut self, pos: Position<Idx>) {
        self.pos = pos;
    }
}

impl<Idx: Index> From<Cursor<Idx>> for ConstCursor<Idx> {
    #[inline]
    fn from(cursor: Cursor<Idx>) -> Self {
        Self::at(cursor.pos)
    }
}

// Equality is node identity only; the owning list is not compared.

impl<Idx: Index> PartialEq for Cursor<Idx> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos.same_node(&other.pos)
    }
}

impl<Idx: Index> Eq for Cursor<Idx> {}

impl<Idx: Index> PartialEq for ConstCursor<Idx> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos.same_node(&other.pos)
    }
}

impl<Idx: Index> Eq for ConstCursor<Idx> {}

impl<Idx: Index> PartialEq<ConstCursor<Idx>> for Cursor<Idx> {
    #[inline]
    fn eq(&self, other: &ConstCursor<Idx>) -> bool {
        self.pos.same_node(&other.pos)
    }
}

impl<Idx: Index> PartialEq<Cursor<Idx>> for ConstCursor<Idx> {
    #[inline]
    fn eq(&self, other: &Cursor<Idx>) -> bool {
        self.pos.same_node(&other.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unattached() {
        let c: Cursor = Cursor::default();
        assert!(!c.is_attached());
        let k: ConstCursor<u32> = ConstCursor::default();
        assert!(!k.is_attached());
    }

    #[test]
    fn equality_ignores_owner() {
        let a = Cursor::at(Position::new(1, 4usize, 99));
        let b = Cursor::at(Position::new(2, 4usize, 99));
        assert_eq!(a, b);
    }

    #[test]
    fn equality_requires_same_stamp() {
        let a = Cursor::at(Position::new(1, 4usize, 99));
        let b = Cursor::at(Position::new(1, 4usize, 100));
        assert_ne!(a, b);
    }

    #[test]
    fn const_from_mutable_compares_across_kinds() {
        let a = Cursor::at(Position::new(1, 3usize, 7));
        let k: ConstCursor = a.into();
        assert!(a == k);
        assert!(k == a);
        assert_eq!(k.position().node, 3);
    }

    #[test]
    fn set_position_moves_cursor() {
        let mut a: Cursor = Cursor::default();
        a.set_position(Position::new(5, 0, 1));
        assert!(a.is_attached());
        assert_eq!(a.position().owner, 5);
    }
}
