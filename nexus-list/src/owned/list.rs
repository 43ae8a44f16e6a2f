//! OwnedList - a doubly-linked list that owns its storage.

use core::fmt;
use core::iter::FusedIterator;

use slab::Slab;

use crate::{ConstCursor, Cursor, Iter, IterMut, List, ListError, Node, Traverse};

type NodeSlab<T> = Slab<Node<T>>;

/// A doubly-linked list that owns its storage.
///
/// This is a convenience wrapper around [`List`] + `slab::Slab` for cases
/// where you don't need to share storage across multiple lists. It has
/// value semantics: cloning copies every element into a fresh slab, and
/// dropping releases the sentinels together with the elements.
///
/// # Example
///
/// ```
/// use nexus_list::{ListError, OwnedList};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Task {
///     id: u64,
///     priority: u8,
/// }
///
/// let mut tasks: OwnedList<Task> = OwnedList::with_capacity(100);
///
/// tasks.push_back(Task { id: 1, priority: 10 });
/// let b = tasks.push_back(Task { id: 2, priority: 5 });
/// tasks.push_back(Task { id: 3, priority: 8 });
///
/// // Remove from middle
/// let task = tasks.remove(b).unwrap();
/// assert_eq!(task.id, 2);
/// assert_eq!(tasks.len(), 2);
/// assert_eq!(tasks.get(b), Err(ListError::InvalidIterator));
///
/// tasks.sort_by(|a, b| a.priority < b.priority);
/// assert_eq!(tasks.front().map(|t| t.id), Ok(3));
/// ```
pub struct OwnedList<T> {
    storage: NodeSlab<T>,
    list: List<T>,
}

impl<T> OwnedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// slab reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut storage = Slab::with_capacity(capacity.saturating_add(2));
        let list = List::new(&mut storage);
        Self { storage, list }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns how many elements fit before the slab reallocates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity().saturating_sub(2)
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn front(&self) -> Result<&T, ListError> {
        self.list.front(&self.storage)
    }

    /// Returns a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.list.front_mut(&mut self.storage)
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn back(&self) -> Result<&T, ListError> {
        self.list.back(&self.storage)
    }

    /// Returns a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        self.list.back_mut(&mut self.storage)
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    /// Cursor at the first element, or `end()` if empty.
    #[inline]
    pub fn begin(&self) -> Cursor {
        self.list.begin(&self.storage)
    }

    /// Cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor {
        self.list.end(&self.storage)
    }

    /// Read-only cursor at the first element.
    #[inline]
    pub fn cbegin(&self) -> ConstCursor {
        self.list.cbegin(&self.storage)
    }

    /// Read-only cursor one past the last element.
    #[inline]
    pub fn cend(&self) -> ConstCursor {
        self.list.cend(&self.storage)
    }

    /// Advances `cursor`. See [`List::move_next`].
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] on a stale or foreign cursor, or at `end()`.
    #[inline]
    pub fn move_next<C: Traverse<usize>>(&self, cursor: &mut C) -> Result<(), ListError> {
        self.list.move_next(&self.storage, cursor)
    }

    /// Moves `cursor` back. See [`List::move_prev`].
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] on a stale or foreign cursor, or at
    /// the first element.
    #[inline]
    pub fn move_prev<C: Traverse<usize>>(&self, cursor: &mut C) -> Result<(), ListError> {
        self.list.move_prev(&self.storage, cursor)
    }

    /// Returns `cursor` advanced by one.
    ///
    /// # Errors
    ///
    /// As [`move_next`](Self::move_next).
    #[inline]
    pub fn next_of<C: Traverse<usize>>(&self, cursor: C) -> Result<C, ListError> {
        self.list.next_of(&self.storage, cursor)
    }

    /// Returns `cursor` moved back by one.
    ///
    /// # Errors
    ///
    /// As [`move_prev`](Self::move_prev).
    #[inline]
    pub fn prev_of<C: Traverse<usize>>(&self, cursor: C) -> Result<C, ListError> {
        self.list.prev_of(&self.storage, cursor)
    }

    /// Returns the element under `cursor`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] unless `cursor` names a live element.
    #[inline]
    pub fn get<C: Traverse<usize>>(&self, cursor: C) -> Result<&T, ListError> {
        self.list.get(&self.storage, cursor)
    }

    /// Returns the element under `cursor` mutably.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] unless `cursor` names a live element.
    #[inline]
    pub fn get_mut(&mut self, cursor: Cursor) -> Result<&mut T, ListError> {
        self.list.get_mut(&mut self.storage, cursor)
    }

    // ========================================================================
    // Insertion and removal
    // ========================================================================

    /// Inserts `value` before `pos`, returning a cursor to it.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] if `pos` does not belong to this list.
    #[inline]
    pub fn insert(&mut self, pos: Cursor, value: T) -> Result<Cursor, ListError> {
        self.list.insert(&mut self.storage, pos, value)
    }

    /// Erases the element at `pos`, returning a cursor to its successor.
    ///
    /// # Errors
    ///
    /// See [`List::erase`].
    #[inline]
    pub fn erase(&mut self, pos: Cursor) -> Result<Cursor, ListError> {
        self.list.erase(&mut self.storage, pos)
    }

    /// Removes and returns the element at `pos`.
    ///
    /// # Errors
    ///
    /// See [`List::erase`].
    #[inline]
    pub fn remove(&mut self, pos: Cursor) -> Result<T, ListError> {
        self.list.remove(&mut self.storage, pos)
    }

    /// Pushes a value to the back of the list.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Cursor {
        self.list.push_back(&mut self.storage, value)
    }

    /// Pushes a value to the front of the list.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Cursor {
        self.list.push_front(&mut self.storage, value)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        self.list.pop_back(&mut self.storage)
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        self.list.pop_front(&mut self.storage)
    }

    /// Clears the list, dropping all values. Capacity is kept.
    pub fn clear(&mut self) {
        self.list.clear(&mut self.storage);
    }

    // ========================================================================
    // Structural algorithms
    // ========================================================================

    /// Sorts ascending by `<`. See [`List::sort_by`].
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        self.list.sort(&mut self.storage);
    }

    /// Sorts with the strict ordering `is_less`. Stable; cursors follow
    /// their elements.
    pub fn sort_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.list.sort_by(&mut self.storage, is_less);
    }

    /// Merges the ascending list `other` into this ascending list by `<`.
    pub fn merge(&mut self, other: &mut Self)
    where
        T: PartialOrd,
    {
        self.merge_by(other, |a, b| a < b);
    }

    /// Merges `other` into `self`; both must be sorted by `is_less`.
    ///
    /// The lists live in different slabs, so `other`'s values are moved
    /// into this slab as a detached run first and then spliced in with
    /// [`List::merge_by`]. Nothing is cloned. Ties keep elements of `self`
    /// first. `other` ends empty and its cursors are stale.
    pub fn merge_by<F>(&mut self, other: &mut Self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if other.is_empty() {
            return;
        }

        let mut run = List::new(&mut self.storage);
        while let Ok(value) = other.list.pop_front(&mut other.storage) {
            run.push_back(&mut self.storage, value);
        }

        self.list.merge_by(&mut self.storage, &mut run, is_less);
        run.destroy(&mut self.storage);
    }

    /// Reverses element order in place.
    pub fn reverse(&mut self) {
        self.list.reverse(&mut self.storage);
    }

    /// Collapses runs of consecutive equal elements to their first element.
    pub fn unique(&mut self)
    where
        T: PartialEq,
    {
        self.list.unique(&mut self.storage);
    }

    /// Collapses runs of consecutive elements matching the run's first
    /// element under `same`.
    pub fn unique_by<F>(&mut self, same: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.list.unique_by(&mut self.storage, same);
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, NodeSlab<T>> {
        self.list.iter(&self.storage)
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, NodeSlab<T>> {
        self.list.iter_mut(&mut self.storage)
    }
}

impl<T> Default for OwnedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OwnedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        copy.extend(self.iter().cloned());
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: PartialEq> PartialEq for OwnedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OwnedList<T> {}

impl<T: fmt::Debug> fmt::Debug for OwnedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for OwnedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for OwnedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

// =============================================================================
// Consuming iterator
// =============================================================================

/// Consuming iterator over the elements of an [`OwnedList`].
pub struct IntoIter<T> {
    list: OwnedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for OwnedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a OwnedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, NodeSlab<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut OwnedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, NodeSlab<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
