//! Priority comparators.
//!
//! The heap is a max-heap over whatever order the comparator defines:
//! `Ordering::Greater` means the first argument has strictly higher priority
//! and sits closer to the root.

use core::cmp::Ordering;

use crate::QueueElement;

/// An ordering over heap elements.
///
/// Implemented for any `Fn(&T, &T) -> Ordering`, so a closure can be passed
/// straight to [`IndexedMaxHeap::new`](crate::IndexedMaxHeap::new).
///
/// The order must be consistent for a given pair for as long as both are in
/// the heap. Returning different answers over time breaks the heap property.
///
/// # Example
///
/// ```
/// use nexus_heap::{IndexedMaxHeap, QueueElement};
///
/// // Min-heap on priority by reversing the order.
/// let mut heap = IndexedMaxHeap::new(
///     |a: &QueueElement<u32, (), u64>, b: &QueueElement<u32, (), u64>| {
///         b.priority.cmp(&a.priority)
///     },
/// );
///
/// heap.enqueue(QueueElement::new(1, (), 30)).unwrap();
/// heap.enqueue(QueueElement::new(2, (), 10)).unwrap();
/// assert_eq!(heap.pop().unwrap().priority, 10);
/// ```
pub trait Compare<T> {
    /// Compares `a` against `b` by priority.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders by `priority` alone. Equal priorities compare `Equal`, so their
/// relative pop order is unspecified.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByPriority;

impl<K, V, P: Ord> Compare<QueueElement<K, V, P>> for ByPriority {
    #[inline]
    fn compare(&self, a: &QueueElement<K, V, P>, b: &QueueElement<K, V, P>) -> Ordering {
        a.priority.cmp(&b.priority)
    }
}

/// Orders by `priority`, breaking ties by insertion order.
///
/// Among equal priorities the element enqueued first (lower `sequence`) ranks
/// higher, so equal-priority elements pop first-in first-out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByPriorityFifo;

impl<K, V, P: Ord> Compare<QueueElement<K, V, P>> for ByPriorityFifo {
    #[inline]
    fn compare(&self, a: &QueueElement<K, V, P>, b: &QueueElement<K, V, P>) -> Ordering {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.sequence.cmp(&a.sequence))
    }
}
