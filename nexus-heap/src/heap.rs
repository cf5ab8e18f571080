//! Indexed binary max-heap with a live key → slot index.
//!
//! Elements live in a dense array in heap order. A side index maps every
//! queued key to its current slot and is rewritten on each move, which is
//! what makes keyed removal and priority changes O(log n).

use core::fmt;
use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

use log::{debug, trace};

use crate::compare::{ByPriorityFifo, Compare};
use crate::index::{PositionIndex, left_of, parent_of, right_of};
use crate::{EmptyQueue, InvalidArgument, QueueElement};

/// A max-heap of [`QueueElement`]s ordered by a comparator, with O(1)
/// lookup of any element's slot by key.
///
/// The element the comparator ranks highest is at the root and is returned
/// first by [`pop`](Self::pop). Each enqueue stamps the element's `sequence`
/// from a per-heap counter; [`ByPriorityFifo`] (the default comparator) uses
/// it to pop equal priorities in insertion order.
///
/// Keys are unique: enqueueing a key that is already queued fails with
/// [`InvalidArgument`] and hands the element back.
///
/// # Example
///
/// ```
/// use nexus_heap::{ByPriorityFifo, IndexedMaxHeap, QueueElement};
///
/// let mut heap = IndexedMaxHeap::new(ByPriorityFifo);
///
/// heap.enqueue(QueueElement::new("low", 'a', 1)).unwrap();
/// heap.enqueue(QueueElement::new("high", 'b', 9)).unwrap();
/// heap.enqueue(QueueElement::new("mid", 'c', 5)).unwrap();
///
/// assert_eq!(heap.peek().unwrap().key, "high");
///
/// // Keyed priority change
/// heap.set_priority("low", 20);
/// assert_eq!(heap.pop().unwrap().key, "low");
/// assert_eq!(heap.pop().unwrap().key, "high");
///
/// // Keyed removal
/// assert_eq!(heap.remove("mid").unwrap().value, 'c');
/// assert!(heap.pop().is_err());
/// ```
#[derive(Clone)]
pub struct IndexedMaxHeap<K, V, P, C = ByPriorityFifo, S = RandomState> {
    /// Elements in heap order.
    heap: Vec<QueueElement<K, V, P>>,
    /// Current slot of every queued key.
    positions: PositionIndex<K, S>,
    compare: C,
    /// Sequence handed to the next enqueued element.
    next_sequence: u64,
}

impl<K, V, P, C> IndexedMaxHeap<K, V, P, C> {
    /// Creates an empty heap ordered by `compare`.
    pub fn new(compare: C) -> Self {
        Self {
            heap: Vec::new(),
            positions: PositionIndex::new(),
            compare,
            next_sequence: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: PositionIndex::with_capacity(capacity),
            compare,
            next_sequence: 0,
        }
    }
}

impl<K, V, P, C: Default> Default for IndexedMaxHeap<K, V, P, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<K, V, P, C, S> IndexedMaxHeap<K, V, P, C, S> {
    /// Creates an empty heap whose position index hashes keys with `hasher`.
    pub fn with_hasher(compare: C, hasher: S) -> Self {
        Self {
            heap: Vec::new(),
            positions: PositionIndex::with_hasher(hasher),
            compare,
            next_sequence: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` elements, hashing keys
    /// with `hasher`.
    pub fn with_capacity_and_hasher(capacity: usize, compare: C, hasher: S) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: PositionIndex::with_capacity_and_hasher(capacity, hasher),
            compare,
            next_sequence: 0,
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the capacity of the heap array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the highest-priority element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&QueueElement<K, V, P>> {
        self.heap.first()
    }

    /// Returns the heap array in heap order.
    ///
    /// Slot 0 is the root; the children of slot `i` are `2i + 1` and
    /// `2i + 2`. The view is read-only so the heap property cannot be broken
    /// from outside.
    #[inline]
    pub fn as_slice(&self) -> &[QueueElement<K, V, P>] {
        &self.heap
    }

    /// Iterates over elements in heap order (not sorted).
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, QueueElement<K, V, P>> {
        self.heap.iter()
    }

    /// Returns the sequence number the next enqueued element will receive.
    #[inline]
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Removes every element. The sequence counter keeps counting.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }
}

impl<K, V, P, C, S> IndexedMaxHeap<K, V, P, C, S>
where
    K: Hash + Eq + Clone,
    C: Compare<QueueElement<K, V, P>>,
    S: BuildHasher,
{
    // ========================================================================
    // Insert / remove
    // ========================================================================

    /// Adds an element, stamping its `sequence`.
    ///
    /// # Errors
    ///
    /// Returns `Err(InvalidArgument(element))` if an element with the same key
    /// is already queued. The heap and its sequence counter are unchanged.
    pub fn enqueue(
        &mut self,
        mut element: QueueElement<K, V, P>,
    ) -> Result<(), InvalidArgument<QueueElement<K, V, P>>> {
        let pos = self.heap.len();
        if !self.positions.insert_new(element.key.clone(), pos) {
            debug!("enqueue rejected: key already queued (len {})", self.heap.len());
            return Err(InvalidArgument(element));
        }

        let sequence = self.next_sequence;
        element.sequence = sequence;
        self.next_sequence += 1;
        self.heap.push(element);
        debug_assert_eq!(self.positions.len(), self.heap.len());

        let slot = self.sift_up(pos);
        trace!("enqueue seq {} -> slot {} (len {})", sequence, slot, self.heap.len());
        Ok(())
    }

    /// Removes and returns the highest-priority element.
    ///
    /// # Errors
    ///
    /// Returns `Err(EmptyQueue)` if the heap is empty.
    pub fn pop(&mut self) -> Result<QueueElement<K, V, P>, EmptyQueue> {
        if self.heap.is_empty() {
            return Err(EmptyQueue);
        }

        // Last element moves into the root slot
        let top = self.heap.swap_remove(0);
        self.positions.remove(&top.key);

        if let Some(root) = self.heap.first() {
            self.positions.set(&root.key, 0);
            self.sift_down(0);
        }

        trace!("pop seq {} (len {})", top.sequence, self.heap.len());
        Ok(top)
    }

    /// Removes the element queued under `key`.
    ///
    /// Returns `None` if no such element is queued.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<QueueElement<K, V, P>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.positions.remove(key)?;
        let removed = self.heap.swap_remove(pos);

        // The former last element now fills `pos` and may belong above or below
        if pos < self.heap.len() {
            self.positions.set::<K>(&self.heap[pos].key, pos);
            let pos = self.sift_down(pos);
            self.sift_up(pos);
        }

        trace!("remove seq {} from slot {} (len {})", removed.sequence, pos, self.heap.len());
        Some(removed)
    }

    // ========================================================================
    // Keyed access
    // ========================================================================

    /// Returns the current slot of `key` in [`as_slice`](Self::as_slice).
    #[inline]
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(key)
    }

    /// Returns `true` if an element with `key` is queued.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains(key)
    }

    /// Returns the element queued under `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&QueueElement<K, V, P>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(key).map(|pos| &self.heap[pos])
    }

    /// Replaces the priority of the element queued under `key` and restores
    /// heap order in whichever direction it moved.
    ///
    /// Returns the previous priority, or `None` if `key` is not queued.
    pub fn set_priority<Q>(&mut self, key: &Q, priority: P) -> Option<P>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.positions.get(key)?;
        let old = core::mem::replace(&mut self.heap[pos].priority, priority);

        let mut slot = self.sift_up(pos);
        if slot == pos {
            slot = self.sift_down(pos);
        }

        trace!("set_priority slot {} -> {}", pos, slot);
        Some(old)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Pops elements in priority order while `pred` accepts the current root.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_heap::{ByPriority, IndexedMaxHeap, QueueElement};
    ///
    /// let mut heap = IndexedMaxHeap::new(ByPriority);
    /// for (key, priority) in [(1, 10), (2, 40), (3, 25), (4, 5)] {
    ///     heap.enqueue(QueueElement::new(key, (), priority)).unwrap();
    /// }
    ///
    /// let urgent: Vec<_> = heap.drain_while(|e| e.priority >= 20).map(|e| e.key).collect();
    /// assert_eq!(urgent, vec![2, 3]);
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn drain_while<F>(&mut self, pred: F) -> DrainWhile<'_, K, V, P, C, S, F>
    where
        F: FnMut(&QueueElement<K, V, P>) -> bool,
    {
        DrainWhile { heap: self, pred }
    }

    /// Consumes the heap, returning its elements in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<QueueElement<K, V, P>> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Ok(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Moves the element at `pos` toward the root while it outranks its
    /// parent. Returns its final slot.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while let Some(parent) = parent_of(pos) {
            if !self.compare.compare(&self.heap[pos], &self.heap[parent]).is_gt() {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Moves the element at `pos` toward the leaves while a child outranks
    /// it. Returns its final slot.
    fn sift_down(&mut self, mut pos: usize) -> usize {
        let Some(last) = self.heap.len().checked_sub(1) else {
            return pos;
        };

        while let Some(child) = self.max_child(pos, last) {
            if !self.compare.compare(&self.heap[pos], &self.heap[child]).is_lt() {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
        pos
    }

    /// The child of `pos` with the higher priority. Ties go to the right
    /// child.
    #[inline]
    fn max_child(&self, pos: usize, last: usize) -> Option<usize> {
        match (left_of(pos, last), right_of(pos, last)) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(right)) => {
                if self.compare.compare(&self.heap[left], &self.heap[right]).is_gt() {
                    Some(left)
                } else {
                    Some(right)
                }
            }
        }
    }

    /// Exchanges two slots and rewrites both keys' positions.
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.set(&self.heap[a].key, a);
        self.positions.set(&self.heap[b].key, b);
    }
}

impl<K, V, P, C, S> fmt::Debug for IndexedMaxHeap<K, V, P, C, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMaxHeap")
            .field("heap", &self.heap)
            .field("next_sequence", &self.next_sequence)
            .finish_non_exhaustive()
    }
}

impl<'a, K, V, P, C, S> IntoIterator for &'a IndexedMaxHeap<K, V, P, C, S> {
    type Item = &'a QueueElement<K, V, P>;
    type IntoIter = core::slice::Iter<'a, QueueElement<K, V, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.heap.iter()
    }
}

/// An iterator that pops elements while a predicate holds.
///
/// Created by [`IndexedMaxHeap::drain_while`].
pub struct DrainWhile<'a, K, V, P, C, S, F> {
    heap: &'a mut IndexedMaxHeap<K, V, P, C, S>,
    pred: F,
}

impl<K, V, P, C, S, F> Iterator for DrainWhile<'_, K, V, P, C, S, F>
where
    K: Hash + Eq + Clone,
    C: Compare<QueueElement<K, V, P>>,
    S: BuildHasher,
    F: FnMut(&QueueElement<K, V, P>) -> bool,
{
    type Item = QueueElement<K, V, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let top = self.heap.peek()?;
        if (self.pred)(top) {
            self.heap.pop().ok()
        } else {
            None
        }
    }
}
