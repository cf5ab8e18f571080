//! Indexed binary max-heap.
//!
//! A priority queue whose elements carry a key, and whose position index
//! maps every queued key to its current slot in the heap array. That index
//! turns the usual push/pop heap into one that can also find, re-prioritize
//! and remove any element by key in O(log n).
//!
//! ```text
//! heap array (heap order)      position index
//! [0] "deploy"  prio 9         "deploy" -> 0
//! [1] "backup"  prio 4         "backup" -> 1
//! [2] "reindex" prio 7         "reindex" -> 2
//! ```
//!
//! # Quick Start
//!
//! ```
//! use nexus_heap::{IndexedMaxHeap, QueueElement};
//!
//! // Default comparator: priority, ties broken first-in first-out
//! let mut jobs: IndexedMaxHeap<&str, u32, u8> = IndexedMaxHeap::default();
//!
//! jobs.enqueue(QueueElement::new("backup", 1001, 4)).unwrap();
//! jobs.enqueue(QueueElement::new("deploy", 1002, 9)).unwrap();
//! jobs.enqueue(QueueElement::new("reindex", 1003, 7)).unwrap();
//!
//! // O(1) slot lookup, O(log n) priority change
//! assert_eq!(jobs.position("deploy"), Some(0));
//! jobs.set_priority("backup", 10);
//!
//! assert_eq!(jobs.pop().unwrap().key, "backup");
//! assert_eq!(jobs.pop().unwrap().key, "deploy");
//! assert_eq!(jobs.pop().unwrap().key, "reindex");
//! assert!(jobs.pop().is_err());
//! ```
//!
//! # Ordering
//!
//! The heap keeps the element its comparator ranks highest at the root.
//! Comparators implement [`Compare`]; any `Fn(&T, &T) -> Ordering` closure
//! does. Two are provided:
//!
//! | Comparator | Order | Equal priorities |
//! |------------|-------|------------------|
//! | [`ByPriorityFifo`] (default) | `priority` descending | insertion order |
//! | [`ByPriority`] | `priority` descending | unspecified |
//!
//! # Keys
//!
//! Keys are unique within a heap. Enqueueing a key that is already queued
//! fails with [`InvalidArgument`], which hands the element back. A key is
//! free again once its element is popped or removed.
//!
//! # Errors
//!
//! | Operation | Error |
//! |-----------|-------|
//! | [`IndexedMaxHeap::enqueue`] | [`InvalidArgument`] on a duplicate key |
//! | [`IndexedMaxHeap::pop`] | [`EmptyQueue`] on an empty heap |
//!
//! A failed call leaves the heap unchanged.
//!
//! # Threading
//!
//! The heap has no internal locking. Mutation takes `&mut self`; share it
//! across threads behind a `Mutex` or similar.
//!
//! # Logging
//!
//! Heap operations emit `trace` records (and `debug` on rejected enqueues)
//! through the [`log`] facade. Install any `log` backend to see them.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`QueueElement`]

#![warn(missing_docs)]

pub mod compare;
pub mod element;
pub mod error;
pub mod heap;
pub(crate) mod index;

pub use compare::{ByPriority, ByPriorityFifo, Compare};
pub use element::QueueElement;
pub use error::{EmptyQueue, InvalidArgument};
pub use heap::{DrainWhile, IndexedMaxHeap};
