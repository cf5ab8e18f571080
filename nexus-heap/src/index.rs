//! Heap index arithmetic and the key → slot position index.
//!
//! The heap array is 0-indexed: the children of slot `i` are `2i + 1` and
//! `2i + 2`, and every slot except the root has parent `(i - 1) / 2`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::{Entry, RandomState};
use std::hash::{BuildHasher, Hash};

/// Returns the parent slot of `i`, or `None` for the root.
#[inline]
pub const fn parent_of(i: usize) -> Option<usize> {
    if i == 0 { None } else { Some((i - 1) / 2) }
}

/// Returns the left child of `i` if it lies at or before `last`.
#[inline]
pub const fn left_of(i: usize, last: usize) -> Option<usize> {
    let child = 2 * i + 1;
    if child <= last { Some(child) } else { None }
}

/// Returns the right child of `i` if it lies at or before `last`.
#[inline]
pub const fn right_of(i: usize, last: usize) -> Option<usize> {
    let child = 2 * i + 2;
    if child <= last { Some(child) } else { None }
}

/// Maps each queued key to its current slot in the heap array.
///
/// The heap rewrites entries on every move, so a lookup always reflects
/// where the element sits now.
#[derive(Debug, Clone)]
pub struct PositionIndex<K, S = RandomState> {
    slots: HashMap<K, usize, S>,
}

impl<K> PositionIndex<K> {
    /// Creates an empty index.
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Creates an empty index with room for `capacity` keys.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
        }
    }
}

impl<K> Default for PositionIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> PositionIndex<K, S> {
    /// Creates an empty index using `hasher`.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            slots: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty index with room for `capacity` keys, using `hasher`.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            slots: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Number of indexed keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Drops every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<K: Hash + Eq, S: BuildHasher> PositionIndex<K, S> {
    /// Records `key` at `slot`.
    ///
    /// Returns `false` and leaves the index untouched if `key` is already
    /// present.
    #[inline]
    pub fn insert_new(&mut self, key: K, slot: usize) -> bool {
        match self.slots.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(slot);
                true
            }
        }
    }

    /// Moves an existing `key` to `slot`. Unknown keys are ignored.
    #[inline]
    pub fn set<Q>(&mut self, key: &Q, slot: usize)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(s) = self.slots.get_mut(key) {
            *s = slot;
        }
    }

    /// Returns the slot recorded for `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(key).copied()
    }

    /// Returns `true` if `key` is indexed.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(key)
    }

    /// Removes `key`, returning its last slot.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parent formula written as odd/even cases.
    fn parent_by_parity(i: usize) -> usize {
        if i % 2 == 1 { i / 2 } else { (i - 1) / 2 }
    }

    #[test]
    fn root_has_no_parent() {
        assert_eq!(parent_of(0), None);
    }

    #[test]
    fn parent_matches_parity_form() {
        for i in 1..10_000 {
            assert_eq!(parent_of(i), Some(parent_by_parity(i)), "index {i}");
        }
    }

    #[test]
    fn parent_inverts_children() {
        for i in 0..1_000 {
            assert_eq!(parent_of(2 * i + 1), Some(i));
            assert_eq!(parent_of(2 * i + 2), Some(i));
        }
    }

    #[test]
    fn children_respect_last_index() {
        // 0 -> (1, 2), 1 -> (3, 4), 2 -> (5, 6)
        assert_eq!(left_of(0, 0), None);
        assert_eq!(right_of(0, 0), None);

        assert_eq!(left_of(0, 1), Some(1));
        assert_eq!(right_of(0, 1), None);

        assert_eq!(left_of(0, 2), Some(1));
        assert_eq!(right_of(0, 2), Some(2));

        assert_eq!(left_of(2, 5), Some(5));
        assert_eq!(right_of(2, 5), None);
        assert_eq!(left_of(3, 5), None);
    }

    #[test]
    fn insert_new_rejects_duplicates() {
        let mut idx: PositionIndex<&str> = PositionIndex::new();
        assert!(idx.insert_new("a", 0));
        assert!(!idx.insert_new("a", 5));
        assert_eq!(idx.get("a"), Some(0));
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn set_moves_known_keys_only() {
        let mut idx: PositionIndex<String> = PositionIndex::with_capacity(4);
        idx.insert_new("a".to_string(), 0);

        idx.set("a", 3);
        assert_eq!(idx.get("a"), Some(3));

        idx.set("missing", 1);
        assert!(!idx.contains("missing"));
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let mut idx: PositionIndex<u32> = PositionIndex::default();
        idx.insert_new(1, 0);
        idx.insert_new(2, 1);

        assert_eq!(idx.remove(&1), Some(0));
        assert_eq!(idx.remove(&1), None);
        assert_eq!(idx.len(), 1);

        idx.clear();
        assert_eq!(idx.len(), 0);
    }
}
