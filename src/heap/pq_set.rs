//! Deduplicating min-priority queue.
//!
//! A [`MinHeap`] paired with a hash set over the same elements. The set
//! gives O(1) membership tests and turns repeated `add`s of an element
//! into no-ops, so every element in the heap is unique.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────┐
//!   │ PriorityQueueSet<T>                                        │
//!   │                                                            │
//!   │   heap:    MinHeap<T>      [ 2 │ 5 │ 3 │ 9 ]   (ordering)   │
//!   │   members: FxHashSet<T>    { 2, 3, 5, 9 }    (membership)  │
//!   │                                                            │
//!   │   invariant: set(heap) == members, heap has no duplicates  │
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation      | Description                              | Complexity |
//! |----------------|------------------------------------------|------------|
//! | `add`          | Insert unless already present            | O(log n)   |
//! | `pop_smallest` | Remove and return the minimum            | O(log n)   |
//! | `has_item`     | Membership test                          | O(1)       |
//! | `from_items`   | Build from a possibly non-unique list    | O(n)       |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::heap::PriorityQueueSet;
//!
//! let mut queue = PriorityQueueSet::from_items([5, 3, 5, 9]);
//! assert_eq!(queue.len(), 3);
//!
//! assert!(queue.add(2));
//! assert!(!queue.add(9));  // already present
//! assert!(queue.has_item(&9));
//!
//! assert_eq!(queue.pop_smallest(), Ok(2));
//! assert_eq!(queue.pop_smallest(), Ok(3));
//! assert!(!queue.has_item(&3));
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe; wrap in a mutex for concurrent access.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use log::trace;
use rustc_hash::FxHashSet;

use super::binary_heap::MinHeap;
use crate::error::{HeapError, InvariantError};

/// Min-priority queue whose elements are unique.
///
/// Elements must be `Ord` for the heap, `Hash + Eq` for the membership set,
/// and `Clone` because each element is stored in both.
#[derive(Clone)]
pub struct PriorityQueueSet<T> {
    heap: MinHeap<T>,
    members: FxHashSet<T>,
}

impl<T> PriorityQueueSet<T>
where
    T: Ord + Hash + Clone,
{
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: MinHeap::new(),
            members: FxHashSet::default(),
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: MinHeap::with_capacity(capacity),
            members: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Builds a queue from `items`, dropping duplicates, in O(n).
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items = items.into_iter();
        let (lower, _) = items.size_hint();
        let mut members = FxHashSet::with_capacity_and_hasher(lower, Default::default());
        let mut unique = Vec::with_capacity(lower);
        for item in items {
            if members.insert(item.clone()) {
                unique.push(item);
            }
        }
        Self {
            heap: MinHeap::from_vec(unique),
            members,
        }
    }

    /// Returns the number of (unique) elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` if `item` is in the queue.
    pub fn has_item<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.members.contains(item)
    }

    /// Adds `item` unless it is already present.
    ///
    /// Returns `true` if the item was inserted.
    pub fn add(&mut self, item: T) -> bool {
        if self.members.contains(&item) {
            trace!("priority queue set: rejected duplicate");
            return false;
        }
        self.members.insert(item.clone());
        self.heap.insert(item);
        true
    }

    /// Borrows the smallest element.
    pub fn peek_smallest(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyQueue`] if the queue is empty.
    pub fn pop_smallest(&mut self) -> Result<T, HeapError> {
        if self.heap.is_empty() {
            return Err(HeapError::EmptyQueue);
        }
        let smallest = self.heap.extract_top()?;
        self.members.remove(&smallest);
        Ok(smallest)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.members.clear();
    }

    /// Iterates over the elements in heap storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Validates that the heap is well-formed and mirrors the membership set.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        T: fmt::Debug,
    {
        self.heap.check_invariants()?;

        if self.heap.len() != self.members.len() {
            return Err(InvariantError::new(format!(
                "heap holds {} elements but membership set holds {}",
                self.heap.len(),
                self.members.len()
            )));
        }
        for item in self.heap.iter() {
            if !self.members.contains(item) {
                return Err(InvariantError::new(format!(
                    "heap element {:?} missing from membership set",
                    item
                )));
            }
        }
        // Equal sizes plus containment rule out duplicates in the heap.
        Ok(())
    }
}

impl<T> Default for PriorityQueueSet<T>
where
    T: Ord + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PriorityQueueSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueueSet")
            .field("heap", &self.heap)
            .field("len", &self.members.len())
            .finish()
    }
}

impl<T> FromIterator<T> for PriorityQueueSet<T>
where
    T: Ord + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T> Extend<T> for PriorityQueueSet<T>
where
    T: Ord + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
