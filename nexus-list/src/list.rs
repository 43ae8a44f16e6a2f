//! Sentinel-bounded doubly-linked list over external node storage.
//!
//! Nodes live in caller-provided [`Storage`]; the list only tracks the two
//! sentinel slots and its length. Every operation takes the storage
//! explicitly, which lets several lists share one pool and lets
//! [`List::merge`] splice nodes between them without moving a single
//! element.
//!
//! # Layout
//!
//! ```text
//!  head                                  tail
//! ┌────┐   ┌────┐   ┌────┐   ┌────┐   ┌────┐
//! │    ├──►│ a  ├──►│ b  ├──►│ c  ├──►│    ├──► NONE
//! NONE ◄──┤    │◄──┤    │◄──┤    │◄──┤    │
//! └────┘   └────┘   └────┘   └────┘   └────┘
//! ```
//!
//! The sentinels never hold a value and are never unlinked, so insertion
//! and removal have no end-of-list special cases.
//!
//! # Storage Invariant
//!
//! A list must always be used with the storage it was created on. A
//! mismatch is caught where a cursor is validated (`InvalidIterator`) and
//! panics anywhere else; it is never undefined behavior.
//!
//! # Example
//!
//! ```
//! use nexus_list::{List, ListError};
//!
//! let mut storage = slab::Slab::new();
//! let mut list: List<u64> = List::new(&mut storage);
//!
//! list.push_back(&mut storage, 1);
//! let three = list.push_back(&mut storage, 3);
//! list.insert(&mut storage, three, 2).unwrap();
//!
//! assert_eq!(list.iter(&storage).copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(list.front(&storage), Ok(&1));
//!
//! // Erased cursors are detected, not dereferenced.
//! list.erase(&mut storage, three).unwrap();
//! assert_eq!(list.get(&storage, three), Err(ListError::InvalidIterator));
//!
//! list.destroy(&mut storage);
//! assert!(storage.is_empty());
//! ```
//!
//! # Moving Nodes Between Lists
//!
//! Lists sharing a storage can exchange nodes by relinking only:
//!
//! ```
//! use nexus_list::List;
//!
//! let mut storage = slab::Slab::new();
//! let mut a: List<u32> = List::new(&mut storage);
//! let mut b: List<u32> = List::new(&mut storage);
//!
//! for v in [1, 3, 5] {
//!     a.push_back(&mut storage, v);
//! }
//! for v in [2, 3, 4] {
//!     b.push_back(&mut storage, v);
//! }
//!
//! let slots = storage.len();
//! a.merge(&mut storage, &mut b);
//!
//! assert_eq!(a.iter(&storage).copied().collect::<Vec<_>>(), [1, 2, 3, 3, 4, 5]);
//! assert!(b.is_empty());
//! assert_eq!(storage.len(), slots);
//! ```

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::cursor::{ConstCursor, Cursor, Position, Traverse};
use crate::node::{Node, next_stamp};
use crate::{Index, ListError, Storage, sort};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// A doubly-linked list bounded by two sentinel nodes, over external storage.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (default `slab::Slab<Node<T>>`)
/// - `Idx`: Slot index type (default `usize`)
///
/// See the [module documentation](self) for an overview.
#[derive(Debug)]
pub struct List<T, S = slab::Slab<Node<T>>, Idx: Index = usize>
where
    S: Storage<Node<T, Idx>, Index = Idx>,
{
    id: u64,
    head: Idx,
    tail: Idx,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, Idx: Index> List<T, S, Idx>
where
    S: Storage<Node<T, Idx>, Index = Idx>,
{
    /// Creates an empty list, allocating its two sentinels in `storage`.
    pub fn new(storage: &mut S) -> Self {
        let head = storage.insert(Node::sentinel());
        let tail = storage.insert(Node::sentinel());
        Self::node_mut(storage, head).next = tail;
        Self::node_mut(storage, tail).prev = head;

        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            head,
            tail,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Releases every element and both sentinels back to `storage`.
    pub fn destroy(mut self, storage: &mut S) {
        self.clear(storage);
        storage.remove(self.head);
        storage.remove(self.tail);
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Node access helpers
    // ========================================================================

    #[inline]
    fn node(storage: &S, idx: Idx) -> &Node<T, Idx> {
        storage
            .get(idx)
            .expect("list links into a vacant slot; list used with a different storage?")
    }

    #[inline]
    fn node_mut(storage: &mut S, idx: Idx) -> &mut Node<T, Idx> {
        storage
            .get_mut(idx)
            .expect("list links into a vacant slot; list used with a different storage?")
    }

    /// Element of an interior node.
    #[inline]
    fn value_at<'a>(storage: &'a S, idx: Idx) -> &'a T
    where
        Idx: 'a,
    {
        Self::node(storage, idx)
            .value
            .as_ref()
            .expect("interior node without a value")
    }

    #[inline]
    fn first(&self, storage: &S) -> Idx {
        Self::node(storage, self.head).next
    }

    #[inline]
    fn last(&self, storage: &S) -> Idx {
        Self::node(storage, self.tail).prev
    }

    #[inline]
    fn position_of(&self, storage: &S, idx: Idx) -> Position<Idx> {
        Position::new(self.id, idx, Self::node(storage, idx).stamp)
    }

    /// Validates `pos` against this list and returns its node.
    fn resolve<'a>(&self, storage: &'a S, pos: Position<Idx>) -> Result<&'a Node<T, Idx>, ListError> {
        if pos.owner != self.id || pos.node.is_none() {
            return Err(ListError::InvalidIterator);
        }
        match storage.get(pos.node) {
            Some(node) if node.stamp == pos.stamp => Ok(node),
            _ => Err(ListError::InvalidIterator),
        }
    }

    // ========================================================================
    // Linking
    // ========================================================================

    /// Links the detached node `idx` immediately before `before`.
    fn link_before(&mut self, storage: &mut S, before: Idx, idx: Idx) {
        let prev = Self::node(storage, before).prev;
        debug_assert!(prev.is_some(), "cannot link before the head sentinel");

        let node = Self::node_mut(storage, idx);
        node.prev = prev;
        node.next = before;

        Self::node_mut(storage, prev).next = idx;
        Self::node_mut(storage, before).prev = idx;
        self.len += 1;
    }

    /// Unlinks interior node `idx`, leaving it in storage with both links cleared.
    fn unlink(&mut self, storage: &mut S, idx: Idx) {
        let node = Self::node(storage, idx);
        let (prev, next) = (node.prev, node.next);
        debug_assert!(prev.is_some() && next.is_some(), "cannot unlink a sentinel");

        Self::node_mut(storage, prev).next = next;
        Self::node_mut(storage, next).prev = prev;

        let node = Self::node_mut(storage, idx);
        node.prev = Idx::NONE;
        node.next = Idx::NONE;
        self.len -= 1;
    }

    /// Unlinks and releases the node at `pos`, returning its value and successor.
    fn detach(&mut self, storage: &mut S, pos: Position<Idx>) -> Result<(T, Idx), ListError> {
        if pos.owner != self.id || pos.node.is_none() {
            return Err(ListError::InvalidIterator);
        }
        if self.len == 0 {
            return Err(ListError::EmptyContainer);
        }

        let node = self.resolve(storage, pos)?;
        if node.is_sentinel() {
            return Err(ListError::InvalidIterator);
        }
        let next = node.next;

        self.unlink(storage, pos.node);
        let value = storage
            .remove(pos.node)
            .and_then(|node| node.value)
            .expect("validated interior node has a value");
        Ok((value, next))
    }

    /// Rewrites the chain between the sentinels to follow `order`.
    fn relink(&mut self, storage: &mut S, order: &[Idx]) {
        debug_assert_eq!(order.len(), self.len);

        let mut prev = self.head;
        for &idx in order {
            Self::node_mut(storage, prev).next = idx;
            Self::node_mut(storage, idx).prev = prev;
            prev = idx;
        }
        Self::node_mut(storage, prev).next = self.tail;
        Self::node_mut(storage, self.tail).prev = prev;
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn front<'a>(&self, storage: &'a S) -> Result<&'a T, ListError>
    where
        Idx: 'a,
    {
        if self.len == 0 {
            return Err(ListError::EmptyContainer);
        }
        Ok(Self::value_at(storage, self.first(storage)))
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn front_mut<'a>(&self, storage: &'a mut S) -> Result<&'a mut T, ListError>
    where
        Idx: 'a,
    {
        if self.len == 0 {
            return Err(ListError::EmptyContainer);
        }
        let first = self.first(storage);
        Ok(Self::node_mut(storage, first)
            .value
            .as_mut()
            .expect("interior node without a value"))
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn back<'a>(&self, storage: &'a S) -> Result<&'a T, ListError>
    where
        Idx: 'a,
    {
        if self.len == 0 {
            return Err(ListError::EmptyContainer);
        }
        Ok(Self::value_at(storage, self.last(storage)))
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn back_mut<'a>(&self, storage: &'a mut S) -> Result<&'a mut T, ListError>
    where
        Idx: 'a,
    {
        if self.len == 0 {
            return Err(ListError::EmptyContainer);
        }
        let last = self.last(storage);
        Ok(Self::node_mut(storage, last)
            .value
            .as_mut()
            .expect("interior node without a value"))
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    /// Cursor at the first element, or [`end`](Self::end) if empty.
    #[inline]
    pub fn begin(&self, storage: &S) -> Cursor<Idx> {
        Cursor::at(self.position_of(storage, self.first(storage)))
    }

    /// Cursor one past the last element. Never dereferenceable.
    #[inline]
    pub fn end(&self, storage: &S) -> Cursor<Idx> {
        Cursor::at(self.position_of(storage, self.tail))
    }

    /// Read-only cursor at the first element, or [`cend`](Self::cend) if empty.
    #[inline]
    pub fn cbegin(&self, storage: &S) -> ConstCursor<Idx> {
        self.begin(storage).into()
    }

    /// Read-only cursor one past the last element.
    #[inline]
    pub fn cend(&self, storage: &S) -> ConstCursor<Idx> {
        self.end(storage).into()
    }

    /// Advances `cursor` to the next node.
    ///
    /// On failure the cursor is left unchanged.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] if the cursor is unattached, belongs
    /// to another list, names an erased node, or is already at `end()`.
    pub fn move_next<C: Traverse<Idx>>(&self, storage: &S, cursor: &mut C) -> Result<(), ListError> {
        let pos = cursor.position();
        let node = self.resolve(storage, pos)?;
        if pos.node == self.tail {
            return Err(ListError::InvalidIterator);
        }
        cursor.set_position(self.position_of(storage, node.next));
        Ok(())
    }

    /// Moves `cursor` back to the previous element.
    ///
    /// From `end()` this yields the last element. On failure the cursor is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] if the cursor is unattached, belongs
    /// to another list, names an erased node, is at the first element, or
    /// is at `end()` of an empty list.
    pub fn move_prev<C: Traverse<Idx>>(&self, storage: &S, cursor: &mut C) -> Result<(), ListError> {
        let pos = cursor.position();
        let node = self.resolve(storage, pos)?;
        if pos.node == self.head {
            return Err(ListError::InvalidIterator);
        }
        if pos.node == self.tail && self.len == 0 {
            return Err(ListError::InvalidIterator);
        }
        if node.prev == self.head {
            return Err(ListError::InvalidIterator);
        }
        cursor.set_position(self.position_of(storage, node.prev));
        Ok(())
    }

    /// Returns a copy of `cursor` advanced by one; `cursor` itself is untouched.
    ///
    /// # Errors
    ///
    /// As [`move_next`](Self::move_next).
    #[inline]
    pub fn next_of<C: Traverse<Idx>>(&self, storage: &S, cursor: C) -> Result<C, ListError> {
        let mut moved = cursor;
        self.move_next(storage, &mut moved)?;
        Ok(moved)
    }

    /// Returns a copy of `cursor` moved back by one; `cursor` itself is untouched.
    ///
    /// # Errors
    ///
    /// As [`move_prev`](Self::move_prev).
    #[inline]
    pub fn prev_of<C: Traverse<Idx>>(&self, storage: &S, cursor: C) -> Result<C, ListError> {
        let mut moved = cursor;
        self.move_prev(storage, &mut moved)?;
        Ok(moved)
    }

    /// Returns the element under `cursor`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] if the cursor is not attached to a
    /// live element of this list (including `end()`).
    #[inline]
    pub fn get<'a, C: Traverse<Idx>>(&self, storage: &'a S, cursor: C) -> Result<&'a T, ListError>
    where
        Idx: 'a,
    {
        self.resolve(storage, cursor.position())?
            .value
            .as_ref()
            .ok_or(ListError::InvalidIterator)
    }

    /// Returns the element under `cursor` mutably.
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get).
    #[inline]
    pub fn get_mut<'a>(&self, storage: &'a mut S, cursor: Cursor<Idx>) -> Result<&'a mut T, ListError>
    where
        Idx: 'a,
    {
        let pos = cursor.position();
        self.resolve(storage, pos)?;
        Self::node_mut(storage, pos.node)
            .value
            .as_mut()
            .ok_or(ListError::InvalidIterator)
    }

    // ========================================================================
    // Insertion and removal
    // ========================================================================

    /// Inserts `value` immediately before `pos` and returns a cursor to it.
    ///
    /// `pos` may be `end()` to append. No other cursor is invalidated.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] if `pos` is unattached, belongs to
    /// another list, or names an erased node. Nothing is allocated and
    /// `value` is dropped.
    pub fn insert(&mut self, storage: &mut S, pos: Cursor<Idx>, value: T) -> Result<Cursor<Idx>, ListError> {
        let at = pos.position();
        if self.resolve(storage, at)?.prev.is_none() {
            return Err(ListError::InvalidIterator);
        }

        let idx = storage.insert(Node::new(value));
        self.link_before(storage, at.node, idx);
        Ok(Cursor::at(self.position_of(storage, idx)))
    }

    /// Erases the element at `pos`, returning a cursor to its successor
    /// (`end()` if it was last).
    ///
    /// Only cursors naming the erased element are invalidated.
    ///
    /// # Errors
    ///
    /// - [`ListError::InvalidIterator`] if `pos` is unattached or foreign.
    /// - [`ListError::EmptyContainer`] if the list is empty.
    /// - [`ListError::InvalidIterator`] if `pos` is `end()` or names an
    ///   erased node.
    #[inline]
    pub fn erase(&mut self, storage: &mut S, pos: Cursor<Idx>) -> Result<Cursor<Idx>, ListError> {
        let (_, next) = self.detach(storage, pos.position())?;
        Ok(Cursor::at(self.position_of(storage, next)))
    }

    /// Removes the element at `pos` and returns it.
    ///
    /// # Errors
    ///
    /// As [`erase`](Self::erase).
    #[inline]
    pub fn remove(&mut self, storage: &mut S, pos: Cursor<Idx>) -> Result<T, ListError> {
        self.detach(storage, pos.position()).map(|(value, _)| value)
    }

    /// Appends `value`, returning a cursor to it.
    #[inline]
    pub fn push_back(&mut self, storage: &mut S, value: T) -> Cursor<Idx> {
        let idx = storage.insert(Node::new(value));
        self.link_before(storage, self.tail, idx);
        Cursor::at(self.position_of(storage, idx))
    }

    /// Prepends `value`, returning a cursor to it.
    #[inline]
    pub fn push_front(&mut self, storage: &mut S, value: T) -> Cursor<Idx> {
        let idx = storage.insert(Node::new(value));
        let first = self.first(storage);
        self.link_before(storage, first, idx);
        Cursor::at(self.position_of(storage, idx))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn pop_back(&mut self, storage: &mut S) -> Result<T, ListError> {
        if self.len == 0 {
            return Err(ListError::EmptyContainer);
        }
        let pos = self.position_of(storage, self.last(storage));
        self.detach(storage, pos).map(|(value, _)| value)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self, storage: &mut S) -> Result<T, ListError> {
        if self.len == 0 {
            return Err(ListError::EmptyContainer);
        }
        let pos = self.position_of(storage, self.first(storage));
        self.detach(storage, pos).map(|(value, _)| value)
    }

    /// Releases every element, leaving the sentinels linked to each other.
    pub fn clear(&mut self, storage: &mut S) {
        let mut idx = self.first(storage);
        while idx != self.tail {
            let next = Self::node(storage, idx).next;
            storage.remove(idx);
            idx = next;
        }

        Self::node_mut(storage, self.head).next = self.tail;
        Self::node_mut(storage, self.tail).prev = self.head;
        self.len = 0;
    }

    // ========================================================================
    // Copying
    // ========================================================================

    /// Creates a new list in `storage` holding clones of every element.
    pub fn duplicate(&self, storage: &mut S) -> Self
    where
        T: Clone,
    {
        let mut copy = Self::new(storage);
        copy.append_clones(storage, self);
        copy
    }

    /// Replaces this list's contents with clones of `other`'s elements.
    ///
    /// The destination is cleared first.
    pub fn assign_from(&mut self, storage: &mut S, other: &Self)
    where
        T: Clone,
    {
        if self.id == other.id {
            return;
        }
        self.clear(storage);
        self.append_clones(storage, other);
    }

    fn append_clones(&mut self, storage: &mut S, other: &Self)
    where
        T: Clone,
    {
        let mut idx = other.first(storage);
        while idx != other.tail {
            let value = Self::value_at(storage, idx).clone();
            let next = Self::node(storage, idx).next;
            self.push_back(storage, value);
            idx = next;
        }
    }

    // ========================================================================
    // Structural algorithms
    // ========================================================================

    /// Sorts ascending by `<`. See [`sort_by`](Self::sort_by).
    #[inline]
    pub fn sort(&mut self, storage: &mut S)
    where
        T: PartialOrd,
    {
        self.sort_by(storage, |a, b| a < b);
    }

    /// Sorts the list with the strict ordering `is_less`.
    ///
    /// Node handles are gathered into a buffer, sorted with
    /// [`sort::sort_by`], and the chain is relinked in that order. No node
    /// is allocated or released and no element moves, so every cursor stays
    /// valid and keeps naming its element. Stable.
    pub fn sort_by<F>(&mut self, storage: &mut S, mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.len <= 1 {
            return;
        }

        let mut handles = Vec::with_capacity(self.len);
        let mut idx = self.first(storage);
        while idx != self.tail {
            handles.push(idx);
            idx = Self::node(storage, idx).next;
        }

        {
            let storage = &*storage;
            sort::sort_by(&mut handles, |&a, &b| {
                is_less(Self::value_at(storage, a), Self::value_at(storage, b))
            });
        }

        self.relink(storage, &handles);
    }

    /// Merges the ascending list `other` into this ascending list by `<`.
    /// See [`merge_by`](Self::merge_by).
    #[inline]
    pub fn merge(&mut self, storage: &mut S, other: &mut Self)
    where
        T: PartialOrd,
    {
        self.merge_by(storage, other, |a, b| a < b);
    }

    /// Merges `other` into `self`; both must already be sorted by `is_less`
    /// and share `storage`.
    ///
    /// A node of `other` is spliced in ahead of the current node of `self`
    /// only when strictly less, so among equal elements those from `self`
    /// come first and each side keeps its own order. Nodes are relinked,
    /// never reallocated. `other` is left empty.
    ///
    /// Spliced nodes get fresh stamps: cursors issued by `other` are stale
    /// afterwards rather than silently pointing into `self`.
    pub fn merge_by<F>(&mut self, storage: &mut S, other: &mut Self, mut is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if other.len == 0 || self.id == other.id {
            return;
        }

        let mut ours = self.first(storage);
        let mut theirs = other.first(storage);

        while ours != self.tail && theirs != other.tail {
            if is_less(Self::value_at(storage, theirs), Self::value_at(storage, ours)) {
                let next = Self::node(storage, theirs).next;
                other.unlink(storage, theirs);
                Self::node_mut(storage, theirs).stamp = next_stamp();
                self.link_before(storage, ours, theirs);
                theirs = next;
            } else {
                ours = Self::node(storage, ours).next;
            }
        }

        if theirs == other.tail {
            return;
        }

        // Everything left in `other` sorts after `self`: splice the run
        // [theirs, other.last] before our tail in one step.
        let first = theirs;
        let last = other.last(storage);
        let mut moved = 0;
        let mut idx = first;
        loop {
            Self::node_mut(storage, idx).stamp = next_stamp();
            moved += 1;
            if idx == last {
                break;
            }
            idx = Self::node(storage, idx).next;
        }

        Self::node_mut(storage, other.head).next = other.tail;
        Self::node_mut(storage, other.tail).prev = other.head;
        other.len -= moved;
        debug_assert_eq!(other.len, 0);

        let our_last = self.last(storage);
        Self::node_mut(storage, our_last).next = first;
        Self::node_mut(storage, first).prev = our_last;
        Self::node_mut(storage, last).next = self.tail;
        Self::node_mut(storage, self.tail).prev = last;
        self.len += moved;
    }

    /// Reverses element order by swapping the values of mirrored nodes.
    ///
    /// No node is relinked. Cursors keep naming their node, which now holds
    /// the mirrored element.
    pub fn reverse(&mut self, storage: &mut S) {
        if self.len <= 1 {
            return;
        }

        let mut left = self.first(storage);
        let mut right = self.last(storage);
        for _ in 0..self.len / 2 {
            let l = Self::node_mut(storage, left).value.take();
            let r = mem::replace(&mut Self::node_mut(storage, right).value, l);
            Self::node_mut(storage, left).value = r;

            left = Self::node(storage, left).next;
            right = Self::node(storage, right).prev;
        }
    }

    /// Collapses runs of consecutive equal elements to their first element.
    /// See [`unique_by`](Self::unique_by).
    #[inline]
    pub fn unique(&mut self, storage: &mut S)
    where
        T: PartialEq,
    {
        self.unique_by(storage, |a, b| a == b);
    }

    /// Collapses each run of consecutive elements for which `same(first, x)`
    /// holds down to its first node, releasing the others.
    ///
    /// Non-adjacent duplicates are kept.
    pub fn unique_by<F>(&mut self, storage: &mut S, mut same: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.len <= 1 {
            return;
        }

        let mut keep = self.first(storage);
        while keep != self.tail {
            let mut idx = Self::node(storage, keep).next;
            while idx != self.tail && same(Self::value_at(storage, keep), Self::value_at(storage, idx)) {
                let next = Self::node(storage, idx).next;
                self.unlink(storage, idx);
                storage.remove(idx);
                idx = next;
            }
            keep = idx;
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter<'a>(&self, storage: &'a S) -> Iter<'a, T, S, Idx> {
        Iter {
            storage,
            front: self.first(storage),
            back: self.last(storage),
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut<'a>(&self, storage: &'a mut S) -> IterMut<'a, T, S, Idx> {
        let front = self.first(storage);
        let back = self.last(storage);
        IterMut {
            storage,
            front,
            back,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Walks the chain and panics on any broken structural invariant.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self, storage: &S) {
        let head = Self::node(storage, self.head);
        let tail = Self::node(storage, self.tail);
        assert!(head.is_sentinel() && tail.is_sentinel());
        assert!(head.prev.is_none(), "head.prev must be NONE");
        assert!(tail.next.is_none(), "tail.next must be NONE");

        let mut count = 0;
        let mut prev = self.head;
        let mut idx = head.next;
        while idx != self.tail {
            let node = Self::node(storage, idx);
            assert_eq!(node.prev, prev, "back-link mismatch");
            assert!(!node.is_sentinel(), "interior sentinel");
            count += 1;
            assert!(count <= self.len, "chain longer than len");
            prev = idx;
            idx = node.next;
        }
        assert_eq!(tail.prev, prev, "tail back-link mismatch");
        assert_eq!(count, self.len);
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T, S, Idx: Index = usize> {
    storage: &'a S,
    front: Idx,
    back: Idx,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, Idx: Index + 'a> Iterator for Iter<'a, T, S, Idx>
where
    S: Storage<Node<T, Idx>, Index = Idx>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.storage.get(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, Idx: Index + 'a> DoubleEndedIterator for Iter<'a, T, S, Idx>
where
    S: Storage<Node<T, Idx>, Index = Idx>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.storage.get(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_ref()
    }
}

impl<'a, T: 'a, S, Idx: Index + 'a> ExactSizeIterator for Iter<'a, T, S, Idx> where
    S: Storage<Node<T, Idx>, Index = Idx>
{
}

impl<'a, T: 'a, S, Idx: Index + 'a> FusedIterator for Iter<'a, T, S, Idx> where
    S: Storage<Node<T, Idx>, Index = Idx>
{
}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T, S, Idx: Index = usize> {
    storage: &'a mut S,
    front: Idx,
    back: Idx,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, Idx: Index + 'a> Iterator for IterMut<'a, T, S, Idx>
where
    S: Storage<Node<T, Idx>, Index = Idx>,
{
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.storage.get_mut(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        let value = node.value.as_mut()?;

        // Safety: `remaining` stops front and back from meeting twice, so
        // each node is yielded once, and `Storage` guarantees distinct slots
        // never alias.
        Some(unsafe { &mut *(value as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, Idx: Index + 'a> DoubleEndedIterator for IterMut<'a, T, S, Idx>
where
    S: Storage<Node<T, Idx>, Index = Idx>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.storage.get_mut(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        let value = node.value.as_mut()?;

        // Safety: see `next`.
        Some(unsafe { &mut *(value as *mut T) })
    }
}

impl<'a, T: 'a, S, Idx: Index + 'a> ExactSizeIterator for IterMut<'a, T, S, Idx> where
    S: Storage<Node<T, Idx>, Index = Idx>
{
}

impl<'a, T: 'a, S, Idx: Index + 'a> FusedIterator for IterMut<'a, T, S, Idx> where
    S: Storage<Node<T, Idx>, Index = Idx>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use slab::Slab;

    type Store = Slab<Node<u64>>;

    fn filled(values: &[u64]) -> (Store, List<u64>) {
        let mut storage = Slab::new();
        let mut list = List::new(&mut storage);
        for &v in values {
            list.push_back(&mut storage, v);
        }
        (storage, list)
    }

    fn collect(list: &List<u64>, storage: &Store) -> Vec<u64> {
        list.iter(storage).copied().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let mut storage: Store = Slab::new();
        let list: List<u64> = List::new(&mut storage);

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(storage.len(), 2, "two sentinels");
        assert_eq!(list.begin(&storage), list.end(&storage));
        list.assert_invariants(&storage);
    }

    #[test]
    fn destroy_releases_sentinels() {
        let (mut storage, list) = filled(&[1, 2, 3]);
        assert_eq!(storage.len(), 5);

        list.destroy(&mut storage);
        assert!(storage.is_empty());
    }

    #[test]
    fn push_back_keeps_order() {
        let (storage, list) = filled(&[1, 2, 3]);

        assert_eq!(list.len(), 3);
        assert_eq!(collect(&list, &storage), vec![1, 2, 3]);
        assert_eq!(list.front(&storage), Ok(&1));
        assert_eq!(list.back(&storage), Ok(&3));
        list.assert_invariants(&storage);
    }

    #[test]
    fn push_front_reverses_order() {
        let mut storage: Store = Slab::new();
        let mut list = List::new(&mut storage);

        list.push_front(&mut storage, 1);
        list.push_front(&mut storage, 2);
        list.push_front(&mut storage, 3);

        assert_eq!(collect(&list, &storage), vec![3, 2, 1]);
        list.assert_invariants(&storage);
    }

    #[test]
    fn front_back_on_empty() {
        let mut storage: Store = Slab::new();
        let list: List<u64> = List::new(&mut storage);

        assert_eq!(list.front(&storage), Err(ListError::EmptyContainer));
        assert_eq!(list.back(&storage), Err(ListError::EmptyContainer));
        assert_eq!(list.front_mut(&mut storage), Err(ListError::EmptyContainer));
        assert_eq!(list.back_mut(&mut storage), Err(ListError::EmptyContainer));
    }

    #[test]
    fn front_mut_and_back_mut() {
        let (mut storage, list) = filled(&[1, 2]);

        *list.front_mut(&mut storage).unwrap() = 10;
        *list.back_mut(&mut storage).unwrap() = 20;
        assert_eq!(collect(&list, &storage), vec![10, 20]);
    }

    #[test]
    fn pop_both_ends() {
        let (mut storage, mut list) = filled(&[1, 2, 3]);

        assert_eq!(list.pop_front(&mut storage), Ok(1));
        assert_eq!(list.pop_back(&mut storage), Ok(3));
        assert_eq!(list.pop_back(&mut storage), Ok(2));
        assert_eq!(list.pop_back(&mut storage), Err(ListError::EmptyContainer));
        assert_eq!(list.pop_front(&mut storage), Err(ListError::EmptyContainer));
        assert_eq!(storage.len(), 2);
        list.assert_invariants(&storage);
    }

    #[test]
    fn insert_before_middle() {
        let (mut storage, mut list) = filled(&[1, 3]);

        let mut it = list.begin(&storage);
        list.move_next(&storage, &mut it).unwrap();
        let two = list.insert(&mut storage, it, 2).unwrap();

        assert_eq!(list.get(&storage, two), Ok(&2));
        assert_eq!(list.get(&storage, it), Ok(&3), "pos stays valid");
        assert_eq!(collect(&list, &storage), vec![1, 2, 3]);
        list.assert_invariants(&storage);
    }

    #[test]
    fn insert_at_end_appends() {
        let (mut storage, mut list) = filled(&[1]);

        let end = list.end(&storage);
        list.insert(&mut storage, end, 2).unwrap();
        assert_eq!(collect(&list, &storage), vec![1, 2]);
        assert!(list.end(&storage) == end, "end() is stable across appends");
    }

    #[test]
    fn insert_with_foreign_cursor_fails() {
        let (mut storage, a) = filled(&[1]);
        let mut b: List<u64> = List::new(&mut storage);

        let foreign = a.begin(&storage);
        assert_eq!(b.insert(&mut storage, foreign, 9), Err(ListError::InvalidIterator));
        assert!(b.is_empty());

        let slots = storage.len();
        assert_eq!(
            b.insert(&mut storage, Cursor::default(), 9),
            Err(ListError::InvalidIterator)
        );
        assert_eq!(storage.len(), slots, "failed insert allocates nothing");
        a.assert_invariants(&storage);
    }

    #[test]
    fn erase_returns_successor() {
        let (mut storage, mut list) = filled(&[1, 2, 3]);

        let first = list.begin(&storage);
        let next = list.erase(&mut storage, first).unwrap();
        assert_eq!(list.get(&storage, next), Ok(&2));
        assert_eq!(list.len(), 2);
        list.assert_invariants(&storage);
    }

    #[test]
    fn erase_last_returns_end() {
        let (mut storage, mut list) = filled(&[7]);

        let it = list.begin(&storage);
        let next = list.erase(&mut storage, it).unwrap();
        assert_eq!(next, list.end(&storage));
        assert!(list.is_empty());
    }

    #[test]
    fn erase_error_order() {
        let (mut storage, mut list) = filled(&[]);

        assert_eq!(
            list.erase(&mut storage, Cursor::default()),
            Err(ListError::InvalidIterator)
        );
        let end = list.end(&storage);
        assert_eq!(list.erase(&mut storage, end), Err(ListError::EmptyContainer));

        list.push_back(&mut storage, 1);
        let end = list.end(&storage);
        assert_eq!(list.erase(&mut storage, end), Err(ListError::InvalidIterator));
    }

    #[test]
    fn erased_cursor_is_stale() {
        let (mut storage, mut list) = filled(&[1, 2, 3]);

        let mut it = list.begin(&storage);
        list.move_next(&storage, &mut it).unwrap();
        let stale = it;
        list.erase(&mut storage, it).unwrap();

        let mut probe = stale;
        assert_eq!(list.move_next(&storage, &mut probe), Err(ListError::InvalidIterator));
        assert_eq!(list.move_prev(&storage, &mut probe), Err(ListError::InvalidIterator));
        assert_eq!(list.get(&storage, stale), Err(ListError::InvalidIterator));
        assert_eq!(list.erase(&mut storage, stale), Err(ListError::InvalidIterator));
        assert_eq!(probe, stale, "failed moves leave the cursor alone");
    }

    #[test]
    fn stale_cursor_detected_after_slot_reuse() {
        let (mut storage, mut list) = filled(&[1, 2]);

        let first = list.begin(&storage);
        list.erase(&mut storage, first).unwrap();

        // Slab hands the freed slot straight back.
        let reused = list.push_back(&mut storage, 3);
        assert_eq!(reused.position().node, first.position().node);
        assert_ne!(reused, first);
        assert_eq!(list.get(&storage, first), Err(ListError::InvalidIterator));
        assert_eq!(list.get(&storage, reused), Ok(&3));
    }

    #[test]
    fn move_next_stops_at_end() {
        let (storage, list) = filled(&[1, 2]);

        let mut it = list.begin(&storage);
        list.move_next(&storage, &mut it).unwrap();
        list.move_next(&storage, &mut it).unwrap();
        assert_eq!(it, list.end(&storage));
        assert_eq!(list.move_next(&storage, &mut it), Err(ListError::InvalidIterator));
        assert_eq!(list.get(&storage, it), Err(ListError::InvalidIterator));
    }

    #[test]
    fn move_prev_boundaries() {
        let (storage, list) = filled(&[1, 2]);

        let mut it = list.end(&storage);
        list.move_prev(&storage, &mut it).unwrap();
        assert_eq!(list.get(&storage, it), Ok(&2));
        list.move_prev(&storage, &mut it).unwrap();
        assert_eq!(list.get(&storage, it), Ok(&1));
        assert_eq!(list.move_prev(&storage, &mut it), Err(ListError::InvalidIterator));
        assert_eq!(list.get(&storage, it), Ok(&1));
    }

    #[test]
    fn move_prev_from_end_of_empty_fails() {
        let (storage, list) = filled(&[]);

        let mut it = list.end(&storage);
        assert_eq!(list.move_prev(&storage, &mut it), Err(ListError::InvalidIterator));
        let mut begin = list.cbegin(&storage);
        assert_eq!(list.move_prev(&storage, &mut begin), Err(ListError::InvalidIterator));
    }

    #[test]
    fn next_of_and_prev_of_leave_argument() {
        let (storage, list) = filled(&[1, 2, 3]);

        let it = list.begin(&storage);
        let second = list.next_of(&storage, it).unwrap();
        assert_eq!(list.get(&storage, it), Ok(&1));
        assert_eq!(list.get(&storage, second), Ok(&2));
        assert_eq!(list.prev_of(&storage, second), Ok(it));
    }

    #[test]
    fn const_cursor_reads() {
        let (storage, list) = filled(&[4, 5]);

        let mut it = list.cbegin(&storage);
        assert_eq!(list.get(&storage, it), Ok(&4));
        list.move_next(&storage, &mut it).unwrap();
        assert_eq!(list.get(&storage, it), Ok(&5));
        list.move_next(&storage, &mut it).unwrap();
        assert!(it == list.cend(&storage));
        assert!(it == list.end(&storage));
    }

    #[test]
    fn get_mut_through_cursor() {
        let (mut storage, list) = filled(&[1, 2]);

        let it = list.begin(&storage);
        *list.get_mut(&mut storage, it).unwrap() += 10;
        assert_eq!(collect(&list, &storage), vec![11, 2]);

        let end = list.end(&storage);
        assert_eq!(list.get_mut(&mut storage, end), Err(ListError::InvalidIterator));
    }

    #[test]
    fn remove_returns_value() {
        let mut storage = Slab::new();
        let mut list: List<String> = List::new(&mut storage);
        let a = list.push_back(&mut storage, "a".to_string());
        list.push_back(&mut storage, "b".to_string());

        assert_eq!(list.remove(&mut storage, a).as_deref(), Ok("a"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clear_relinks_sentinels() {
        let (mut storage, mut list) = filled(&[1, 2, 3]);

        let stale = list.begin(&storage);
        list.clear(&mut storage);
        assert!(list.is_empty());
        assert_eq!(storage.len(), 2);
        assert_eq!(list.get(&storage, stale), Err(ListError::InvalidIterator));
        list.assert_invariants(&storage);

        list.push_back(&mut storage, 9);
        assert_eq!(collect(&list, &storage), vec![9]);
    }

    #[test]
    fn duplicate_is_deep() {
        let (mut storage, list) = filled(&[1, 2, 3]);

        let mut copy = list.duplicate(&mut storage);
        copy.push_back(&mut storage, 4);
        *copy.front_mut(&mut storage).unwrap() = 100;

        assert_eq!(collect(&list, &storage), vec![1, 2, 3]);
        assert_eq!(collect(&copy, &storage), vec![100, 2, 3, 4]);
        copy.assert_invariants(&storage);
    }

    #[test]
    fn assign_from_clears_destination() {
        let (mut storage, source) = filled(&[1, 2]);
        let mut dest: List<u64> = List::new(&mut storage);
        dest.push_back(&mut storage, 9);
        dest.push_back(&mut storage, 8);

        dest.assign_from(&mut storage, &source);
        assert_eq!(collect(&dest, &storage), vec![1, 2]);
        assert_eq!(storage.len(), 2 + 2 + 2 + 2);
    }

    #[test]
    fn sort_relinks_without_allocating() {
        let (mut storage, mut list) = filled(&[3, 1, 2]);
        let three = list.begin(&storage);
        let slots = storage.len();

        list.sort(&mut storage);
        assert_eq!(collect(&list, &storage), vec![1, 2, 3]);
        assert_eq!(storage.len(), slots);
        assert_eq!(list.get(&storage, three), Ok(&3), "cursor follows its element");
        assert_eq!(list.next_of(&storage, three), Ok(list.end(&storage)));
        list.assert_invariants(&storage);
    }

    #[test]
    fn sort_by_descending_and_trivial() {
        let (mut storage, mut list) = filled(&[1, 5, 2, 4, 3]);
        list.sort_by(&mut storage, |a, b| a > b);
        assert_eq!(collect(&list, &storage), vec![5, 4, 3, 2, 1]);

        let (mut storage, mut single) = filled(&[1]);
        single.sort(&mut storage);
        assert_eq!(collect(&single, &storage), vec![1]);
    }

    #[test]
    fn merge_interleaves_and_empties_other() {
        let mut storage: Store = Slab::new();
        let mut a = List::new(&mut storage);
        let mut b = List::new(&mut storage);
        let a3 = {
            a.push_back(&mut storage, 1);
            let c = a.push_back(&mut storage, 3);
            a.push_back(&mut storage, 5);
            c
        };
        for v in [2, 3, 4] {
            b.push_back(&mut storage, v);
        }
        let slots = storage.len();

        a.merge(&mut storage, &mut b);

        assert_eq!(collect(&a, &storage), vec![1, 2, 3, 3, 4, 5]);
        assert!(b.is_empty());
        assert_eq!(storage.len(), slots);

        // The first 3 is the one that was already in `a`.
        let mut it = a.begin(&storage);
        a.move_next(&storage, &mut it).unwrap();
        a.move_next(&storage, &mut it).unwrap();
        assert_eq!(it, a3);

        a.assert_invariants(&storage);
        b.assert_invariants(&storage);
    }

    #[test]
    fn merge_tail_splice() {
        let (mut storage, mut a) = filled(&[1, 2]);
        let mut b: List<u64> = List::new(&mut storage);
        for v in [5, 6, 7] {
            b.push_back(&mut storage, v);
        }

        a.merge(&mut storage, &mut b);
        assert_eq!(collect(&a, &storage), vec![1, 2, 5, 6, 7]);
        assert_eq!(a.len(), 5);
        assert_eq!(b.len(), 0);
        a.assert_invariants(&storage);
        b.assert_invariants(&storage);
    }

    #[test]
    fn merge_into_empty_and_from_empty() {
        let (mut storage, mut a) = filled(&[]);
        let mut b: List<u64> = List::new(&mut storage);
        for v in [1, 2] {
            b.push_back(&mut storage, v);
        }

        a.merge(&mut storage, &mut b);
        assert_eq!(collect(&a, &storage), vec![1, 2]);

        a.merge(&mut storage, &mut b);
        assert_eq!(collect(&a, &storage), vec![1, 2]);
        a.assert_invariants(&storage);
    }

    #[test]
    fn merge_stales_cursors_from_other() {
        let (mut storage, mut a) = filled(&[1]);
        let mut b: List<u64> = List::new(&mut storage);
        let moved = b.push_back(&mut storage, 0);

        a.merge(&mut storage, &mut b);
        assert_eq!(b.get(&storage, moved), Err(ListError::InvalidIterator));
        assert_eq!(a.get(&storage, moved), Err(ListError::InvalidIterator));
        assert_eq!(collect(&a, &storage), vec![0, 1]);
    }

    #[test]
    fn reverse_swaps_values_in_place() {
        let (mut storage, mut list) = filled(&[1, 2, 3, 4, 5]);
        let first = list.begin(&storage);

        list.reverse(&mut storage);
        assert_eq!(collect(&list, &storage), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.get(&storage, first), Ok(&5), "node kept, value swapped");

        list.reverse(&mut storage);
        assert_eq!(collect(&list, &storage), vec![1, 2, 3, 4, 5]);
        list.assert_invariants(&storage);
    }

    #[test]
    fn reverse_even_and_trivial() {
        let (mut storage, mut list) = filled(&[1, 2, 3, 4]);
        list.reverse(&mut storage);
        assert_eq!(collect(&list, &storage), vec![4, 3, 2, 1]);

        let (mut storage, mut empty) = filled(&[]);
        empty.reverse(&mut storage);
        assert!(empty.is_empty());
    }

    #[test]
    fn unique_collapses_adjacent_runs_only() {
        let (mut storage, mut list) = filled(&[1, 1, 2, 2, 1]);

        list.unique(&mut storage);
        assert_eq!(collect(&list, &storage), vec![1, 2, 1]);
        assert_eq!(list.len(), 3);
        assert_eq!(storage.len(), 2 + 3, "duplicates released");
        list.assert_invariants(&storage);
    }

    #[test]
    fn unique_by_compares_against_run_head() {
        let (mut storage, mut list) = filled(&[10, 11, 12, 20, 21]);

        list.unique_by(&mut storage, |a, b| a / 10 == b / 10);
        assert_eq!(collect(&list, &storage), vec![10, 20]);
    }

    #[test]
    fn unique_keeps_first_node_cursor() {
        let (mut storage, mut list) = filled(&[3, 3, 3]);
        let first = list.begin(&storage);
        let mut second = first;
        list.move_next(&storage, &mut second).unwrap();

        list.unique(&mut storage);
        assert_eq!(list.get(&storage, first), Ok(&3));
        assert_eq!(list.get(&storage, second), Err(ListError::InvalidIterator));
    }

    #[test]
    fn iter_double_ended_and_exact() {
        let (storage, list) = filled(&[1, 2, 3, 4]);

        let mut it = list.iter(&storage);
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn iter_mut_updates() {
        let (mut storage, list) = filled(&[1, 2, 3]);

        for v in list.iter_mut(&mut storage) {
            *v *= 10;
        }
        assert_eq!(collect(&list, &storage), vec![10, 20, 30]);

        let rev: Vec<u64> = list.iter_mut(&mut storage).rev().map(|v| *v).collect();
        assert_eq!(rev, vec![30, 20, 10]);
    }

    #[test]
    fn u32_indexed_storage() {
        struct Compact(Slab<Node<u8, u32>>);

        unsafe impl Storage<Node<u8, u32>> for Compact {
            type Index = u32;

            fn insert(&mut self, value: Node<u8, u32>) -> u32 {
                u32::from_usize(self.0.insert(value))
            }
            fn remove(&mut self, index: u32) -> Option<Node<u8, u32>> {
                self.0.try_remove(index.as_usize())
            }
            fn get(&self, index: u32) -> Option<&Node<u8, u32>> {
                self.0.get(index.as_usize())
            }
            fn get_mut(&mut self, index: u32) -> Option<&mut Node<u8, u32>> {
                self.0.get_mut(index.as_usize())
            }
            fn len(&self) -> usize {
                self.0.len()
            }
        }

        let mut storage = Compact(Slab::new());
        let mut list: List<u8, Compact, u32> = List::new(&mut storage);
        list.push_back(&mut storage, 2);
        list.push_front(&mut storage, 1);

        assert_eq!(list.iter(&storage).copied().collect::<Vec<_>>(), vec![1, 2]);
        list.assert_invariants(&storage);
    }
}
