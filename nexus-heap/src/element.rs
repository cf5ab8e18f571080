//! Queue elements: a keyed payload plus the fields the comparator reads.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An element stored in an [`IndexedMaxHeap`](crate::IndexedMaxHeap).
///
/// - `key` identifies the element in the heap's position index.
/// - `value` is an arbitrary payload, never consulted for ordering.
/// - `priority` is read only by the comparator.
/// - `sequence` is stamped by the heap on enqueue and is strictly increasing
///   over the heap's lifetime. Whatever the caller put there is overwritten.
///
/// # Example
///
/// ```
/// use nexus_heap::{ByPriority, IndexedMaxHeap, QueueElement};
///
/// let mut heap = IndexedMaxHeap::new(ByPriority);
/// heap.enqueue(QueueElement::new("a", (), 3)).unwrap();
/// heap.enqueue(QueueElement::new("b", (), 8)).unwrap();
///
/// let top = heap.pop().unwrap();
/// assert_eq!(top.key, "b");
/// assert_eq!(top.sequence, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueueElement<K, V, P> {
    /// Identity used for position lookups.
    pub key: K,
    /// Associated data.
    pub value: V,
    /// Ordering input for the comparator.
    pub priority: P,
    /// Insertion order, assigned by the heap.
    pub sequence: u64,
}

impl<K, V, P> QueueElement<K, V, P> {
    /// Creates an element with `sequence` zeroed. The heap assigns the real
    /// sequence number when the element is enqueued.
    #[inline]
    pub const fn new(key: K, value: V, priority: P) -> Self {
        Self {
            key,
            value,
            priority,
            sequence: 0,
        }
    }

    /// Splits the element into `(key, value, priority)`.
    #[inline]
    pub fn into_parts(self) -> (K, V, P) {
        (self.key, self.value, self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zeroes_sequence() {
        let e = QueueElement::new(1u32, "payload", 7i64);
        assert_eq!(e.key, 1);
        assert_eq!(e.value, "payload");
        assert_eq!(e.priority, 7);
        assert_eq!(e.sequence, 0);
    }

    #[test]
    fn into_parts() {
        let e = QueueElement::new('k', vec![1, 2], 3u8);
        let (k, v, p) = e.into_parts();
        assert_eq!(k, 'k');
        assert_eq!(v, vec![1, 2]);
        assert_eq!(p, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_round_trip() {
        let mut e = QueueElement::new(String::from("job-1"), 42u64, 5i32);
        e.sequence = 9;

        let json = serde_json::to_string(&e).unwrap();
        let back: QueueElement<String, u64, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
