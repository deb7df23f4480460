//! Array-backed binary heap with a compile-time order.
//!
//! `BinaryHeap<T, O>` stores a complete binary tree in a `Vec<T>` and keeps
//! the heap property for order `O` between every pair of public calls. The
//! backing vector is never handed out mutably.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                     BinaryHeap<T, MinOrder>                          │
//! │                                                                      │
//! │   data: Vec<T>                                                       │
//! │   ┌────┬────┬────┬────┬────┬────┬────┬────┐                          │
//! │   │  2 │  3 │  7 │  7 │ 12 │ 10 │ 90 │ 15 │                          │
//! │   └────┴────┴────┴────┴────┴────┴────┴────┘                          │
//! │     0    1    2    3    4    5    6    7                             │
//! │                                                                      │
//! │                   2                                                  │
//! │                /     \                                               │
//! │              3         7                                             │
//! │            /   \     /   \                                           │
//! │           7    12   10    90                                         │
//! │          /                                                           │
//! │        15                                                            │
//! └──────────────────────────────────────────────────────────────────────┘
//!
//! insert(v):      push v, sift_up(len - 1)
//! extract_top():  swap(0, last), pop, sift_down(0, len)
//! delete_at(i):   swap_remove(i), then sift_up(i) or sift_down(i, len)
//! ```
//!
//! ## Operations
//!
//! | Operation         | Description                          | Complexity |
//! |-------------------|--------------------------------------|------------|
//! | `from_vec`        | Heapify an owned vector              | O(n)       |
//! | `from_slice`      | Heapify a private copy of a slice    | O(n)       |
//! | `insert`          | Add an element                       | O(log n)   |
//! | `extract_top`     | Remove the top element               | O(log n)   |
//! | `delete_at`       | Remove the element at an index       | O(log n)   |
//! | `peek`            | Borrow the top element               | O(1)       |
//! | `into_sorted_vec` | Consume into priority order          | O(n log n) |
//! | `is_valid`        | Check the heap property              | O(n)       |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::heap::{MaxHeap, MinHeap};
//!
//! let input = vec![90, 15, 10, 7, 12, 2, 7, 3];
//!
//! let mut min = MinHeap::from_slice(&input);
//! assert_eq!(min.extract_top(), Ok(2));
//! assert_eq!(min.extract_top(), Ok(3));
//!
//! let mut max = MaxHeap::from_slice(&input);
//! max.insert(100);
//! assert_eq!(max.peek(), Some(&100));
//!
//! // The caller's sequence is untouched.
//! assert_eq!(input, vec![90, 15, 10, 7, 12, 2, 7, 3]);
//! ```
//!
//! ## Thread Safety
//!
//! `BinaryHeap` has no internal locking. Use
//! [`ConcurrentBinaryHeap`](crate::heap::ConcurrentBinaryHeap) (feature
//! `concurrency`) to share one across threads.

use std::fmt;
use std::marker::PhantomData;

use log::debug;

use super::index::parent;
use super::order::{HeapOrder, MaxOrder, MinOrder};
use super::sift::{first_violation, heapify, is_valid_heap, sift_down, sift_up};
use crate::error::{HeapError, InvariantError};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::HeapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::HeapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    HeapMetricsReadRecorder, HeapMetricsRecorder, MetricsReset, MetricsSnapshotProvider,
};

/// Heap with the smallest element on top.
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// Heap with the largest element on top.
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

/// Array-backed binary heap ordered by `O`.
///
/// # Type Parameters
///
/// - `T`: Element type (must be `Ord`)
/// - `O`: [`MinOrder`] (default) or [`MaxOrder`]
///
/// # Example
///
/// ```
/// use heapkit::heap::{BinaryHeap, MinOrder};
///
/// let mut heap: BinaryHeap<&str, MinOrder> = BinaryHeap::new();
/// heap.insert("pear");
/// heap.insert("apple");
/// heap.insert("fig");
///
/// assert_eq!(heap.extract_top(), Ok("apple"));
/// assert_eq!(heap.extract_top(), Ok("fig"));
/// assert_eq!(heap.extract_top(), Ok("pear"));
/// assert!(heap.extract_top().is_err());
/// ```
#[derive(Clone)]
pub struct BinaryHeap<T, O = MinOrder> {
    data: Vec<T>,
    #[cfg(feature = "metrics")]
    metrics: HeapMetrics,
    _order: PhantomData<O>,
}

impl<T, O> BinaryHeap<T, O>
where
    T: Ord,
    O: HeapOrder,
{
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::from_storage(Vec::new())
    }

    /// Creates an empty heap with room for `capacity` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::heap::MinHeap;
    ///
    /// let heap: MinHeap<u64> = MinHeap::with_capacity(64);
    /// assert!(heap.capacity() >= 64);
    /// assert!(heap.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Vec::with_capacity(capacity))
    }

    /// Builds a heap from an owned vector in O(n).
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::heap::MaxHeap;
    ///
    /// let heap = MaxHeap::from_vec(vec![3, 9, 1, 4]);
    /// assert_eq!(heap.peek(), Some(&9));
    /// assert!(heap.is_valid());
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self::from_storage(data);
        let swaps = heapify::<T, O>(&mut heap.data);
        #[cfg(feature = "metrics")]
        heap.metrics.record_heapify(swaps);
        debug!(
            "heapified {} elements into a {}-heap ({} swaps)",
            heap.data.len(),
            O::NAME,
            swaps
        );
        heap
    }

    /// Builds a heap from a private copy of `items`; `items` is not modified.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(items.to_vec())
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the allocated capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Shrinks the backing storage to fit the current elements.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Borrows the top element (minimum for `MinOrder`, maximum for `MaxOrder`).
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::heap::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// assert_eq!(heap.peek(), None);
    /// heap.insert(5);
    /// heap.insert(2);
    /// assert_eq!(heap.peek(), Some(&2));
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        if let Some(top) = self.data.first() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_peek_found();
            return Some(top);
        }
        None
    }

    /// Adds `value`, restoring the heap property in O(log n).
    pub fn insert(&mut self, value: T) {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        self.data.push(value);
        let last = self.data.len() - 1;
        self.repair_up(last);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty; the heap is
    /// left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::error::HeapError;
    /// use heapkit::heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![4, 1, 3]);
    /// assert_eq!(heap.extract_top(), Ok(1));
    /// assert_eq!(heap.extract_top(), Ok(3));
    /// assert_eq!(heap.extract_top(), Ok(4));
    /// assert_eq!(heap.extract_top(), Err(HeapError::EmptyHeap));
    /// ```
    pub fn extract_top(&mut self) -> Result<T, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_extract_call();

        if self.data.is_empty() {
            #[cfg(feature = "metrics")]
            self.metrics.record_extract_empty();
            return Err(HeapError::EmptyHeap);
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop().ok_or(HeapError::EmptyHeap)?;
        self.repair_down(0);
        Ok(top)
    }

    /// Removes and returns the element stored at `index`.
    ///
    /// The last element is moved into the hole and percolated in whichever
    /// direction it violates; at most one direction can apply.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= len()`; the heap is
    /// left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![90, 15, 10, 7, 12, 2, 7, 3]);
    /// assert_eq!(heap.as_slice()[2], 7);
    /// assert_eq!(heap.delete_at(2), Ok(7));
    /// assert_eq!(heap.len(), 7);
    /// assert!(heap.is_valid());
    /// assert!(heap.delete_at(7).is_err());
    /// ```
    pub fn delete_at(&mut self, index: usize) -> Result<T, HeapError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_delete_call();

        let len = self.data.len();
        if index >= len {
            #[cfg(feature = "metrics")]
            self.metrics.record_delete_out_of_range();
            return Err(HeapError::IndexOutOfRange { index, len });
        }

        let removed = self.data.swap_remove(index);
        if index >= self.data.len() {
            return Ok(removed);
        }

        let moved_up = match parent(index) {
            Some(up) => O::precedes(&self.data[index], &self.data[up]),
            None => false,
        };
        if moved_up {
            self.repair_up(index);
        } else {
            self.repair_down(index);
        }
        Ok(removed)
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.data.clear();
    }

    /// Returns the elements in storage (level) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in storage order, which is not sorted.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and returns its storage in level order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its elements sorted so that the top
    /// element comes last.
    ///
    /// A `MaxHeap` yields ascending order, a `MinHeap` descending order. The
    /// sort runs in place on the backing storage.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::heap::{MaxHeap, MinHeap};
    ///
    /// let input = [5, 1, 4, 2, 3];
    /// assert_eq!(MaxHeap::from_slice(&input).into_sorted_vec(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(MinHeap::from_slice(&input).into_sorted_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut data = self.data;
        for end in (1..data.len()).rev() {
            data.swap(0, end);
            sift_down::<T, O>(&mut data, 0, end);
        }
        data
    }

    /// Returns `true` if the heap property holds for every parent/child pair.
    pub fn is_valid(&self) -> bool {
        is_valid_heap::<T, O>(&self.data)
    }

    /// Validates the heap property, naming the first violating pair.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        T: fmt::Debug,
    {
        match first_violation::<T, O>(&self.data) {
            None => Ok(()),
            Some((up, down)) => Err(InvariantError::new(format!(
                "{}-heap property violated: data[{}] = {:?} above data[{}] = {:?}",
                O::NAME,
                up,
                self.data[up],
                down,
                self.data[down]
            ))),
        }
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics.snapshot_with_len(self.data.len())
    }

    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }

    fn from_storage(data: Vec<T>) -> Self {
        Self {
            data,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
            _order: PhantomData,
        }
    }

    #[cfg(feature = "metrics")]
    fn repair_up(&mut self, index: usize) {
        let swaps = sift_up::<T, O>(&mut self.data, index);
        self.metrics.record_sift_up_swaps(swaps);
    }

    #[cfg(not(feature = "metrics"))]
    fn repair_up(&mut self, index: usize) {
        sift_up::<T, O>(&mut self.data, index);
    }

    #[cfg(feature = "metrics")]
    fn repair_down(&mut self, index: usize) {
        let len = self.data.len();
        let swaps = sift_down::<T, O>(&mut self.data, index, len);
        self.metrics.record_sift_down_swaps(swaps);
    }

    #[cfg(not(feature = "metrics"))]
    fn repair_down(&mut self, index: usize) {
        let len = self.data.len();
        sift_down::<T, O>(&mut self.data, index, len);
    }
}

#[cfg(feature = "metrics")]
impl<T, O> MetricsSnapshotProvider<HeapMetricsSnapshot> for BinaryHeap<T, O>
where
    T: Ord,
    O: HeapOrder,
{
    fn snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T, O> fmt::Debug for BinaryHeap<T, O>
where
    T: fmt::Debug,
    O: HeapOrder,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("order", &O::NAME)
            .field("data", &self.data)
            .finish()
    }
}

impl<T, O> Default for BinaryHeap<T, O>
where
    T: Ord,
    O: HeapOrder,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> From<Vec<T>> for BinaryHeap<T, O>
where
    T: Ord,
    O: HeapOrder,
{
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T, O> FromIterator<T> for BinaryHeap<T, O>
where
    T: Ord,
    O: HeapOrder,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, O> Extend<T> for BinaryHeap<T, O>
where
    T: Ord,
    O: HeapOrder,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const L1: [i32; 8] = [90, 15, 10, 7, 12, 2, 7, 3];

    fn drain<O: HeapOrder>(mut heap: BinaryHeap<i32, O>) -> Vec<i32> {
        let mut out = Vec::with_capacity(heap.len());
        while let Ok(v) = heap.extract_top() {
            out.push(v);
        }
        out
    }

    // ==============================================
    // Construction
    // ==============================================

    #[test]
    fn new_heap_is_empty() {
        let heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn default_creates_empty_heap() {
        let heap: MaxHeap<i32> = MaxHeap::default();
        assert!(heap.is_empty());
    }

    #[test]
    fn from_slice_does_not_touch_caller_sequence() {
        let input = L1.to_vec();
        let mut heap = MinHeap::from_slice(&input);
        heap.insert(-1);
        heap.extract_top().unwrap();
        assert_eq!(input, L1.to_vec());
    }

    #[test]
    fn from_vec_known_layout() {
        let heap = MinHeap::from_vec(L1.to_vec());
        assert_eq!(heap.as_slice(), &[2, 3, 7, 7, 12, 10, 90, 15]);
        assert!(heap.is_valid());
    }

    #[test]
    fn from_iterator_and_from_vec_agree() {
        let a: MaxHeap<i32> = L1.iter().copied().collect();
        let b = MaxHeap::from(L1.to_vec());
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn from_empty_and_single() {
        let empty: MinHeap<i32> = MinHeap::from_vec(vec![]);
        assert!(empty.is_empty());
        let one = MinHeap::from_vec(vec![42]);
        assert_eq!(one.peek(), Some(&42));
    }

    // ==============================================
    // Insert
    // ==============================================

    #[test]
    fn insert_keeps_heap_valid() {
        let mut heap = MinHeap::new();
        for v in [5, 3, 8, 1, 9, 2, 7, 4, 6] {
            heap.insert(v);
            assert!(heap.is_valid());
        }
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.len(), 9);
    }

    #[test]
    fn insert_ascending_and_descending() {
        let mut up = MaxHeap::new();
        let mut down = MaxHeap::new();
        for i in 1..=50 {
            up.insert(i);
            down.insert(51 - i);
        }
        assert_eq!(up.peek(), Some(&50));
        assert_eq!(down.peek(), Some(&50));
        assert!(up.is_valid() && down.is_valid());
    }

    #[test]
    fn extend_inserts_every_item() {
        let mut heap = MinHeap::from_vec(vec![10, 20]);
        heap.extend([5, 30, 1]);
        assert_eq!(heap.len(), 5);
        assert_eq!(drain(heap), vec![1, 5, 10, 20, 30]);
    }

    // ==============================================
    // ExtractTop
    // ==============================================

    #[test]
    fn extract_top_yields_sorted_order() {
        let heap = MinHeap::from_slice(&L1);
        assert_eq!(drain(heap), vec![2, 3, 7, 7, 10, 12, 15, 90]);

        let heap = MaxHeap::from_slice(&L1);
        assert_eq!(drain(heap), vec![90, 15, 12, 10, 7, 7, 3, 2]);
    }

    #[test]
    fn extract_top_on_empty_is_error_and_noop() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(heap.extract_top(), Err(HeapError::EmptyHeap));
        assert!(heap.is_empty());
        assert_eq!(heap.extract_top(), Err(HeapError::EmptyHeap));
    }

    #[test]
    fn extract_top_restores_heap_after_each_call() {
        let mut heap = MinHeap::from_vec((0..100).rev().collect());
        for expected in 0..100 {
            assert_eq!(heap.extract_top(), Ok(expected));
            assert!(heap.is_valid());
        }
    }

    #[test]
    fn duplicates_and_negatives() {
        let heap = MinHeap::from_vec(vec![5, -5, 5, 3, 3, -20, 0]);
        assert_eq!(drain(heap), vec![-20, -5, 0, 3, 3, 5, 5]);
    }

    // ==============================================
    // DeleteAt
    // ==============================================

    #[test]
    fn delete_at_returns_element_at_position() {
        let mut heap = MinHeap::from_slice(&L1);
        let expected = heap.as_slice()[2];
        assert_eq!(heap.delete_at(2), Ok(expected));
        assert_eq!(heap.len(), 7);
        assert!(heap.is_valid());
        assert_eq!(heap.as_slice(), &[2, 3, 10, 7, 12, 15, 90]);
    }

    #[test]
    fn delete_at_after_extract_matches_reference_run() {
        let mut heap = MinHeap::from_slice(&L1);
        assert_eq!(heap.extract_top(), Ok(2));
        assert_eq!(heap.delete_at(2), Ok(7));
        assert!(heap.is_valid());
        assert_eq!(heap.into_sorted_vec(), vec![90, 15, 12, 10, 7, 3]);
    }

    #[test]
    fn delete_last_index_needs_no_repair() {
        let mut heap = MinHeap::from_vec(vec![1, 2, 3]);
        assert_eq!(heap.delete_at(2), Ok(3));
        assert_eq!(heap.as_slice(), &[1, 2]);
    }

    #[test]
    fn delete_root() {
        let mut heap = MaxHeap::from_vec(vec![1, 9, 4, 7]);
        assert_eq!(heap.delete_at(0), Ok(9));
        assert_eq!(heap.peek(), Some(&7));
        assert!(heap.is_valid());
    }

    #[test]
    fn delete_at_moves_replacement_up() {
        // The last element (4, under the left subtree) is smaller than the
        // parent (10) of the hole at index 5 in the right subtree.
        let mut heap = MinHeap::from_vec(vec![0, 1, 10, 2, 3, 11, 12, 4]);
        assert_eq!(heap.as_slice(), &[0, 1, 10, 2, 3, 11, 12, 4]);
        assert_eq!(heap.delete_at(5), Ok(11));
        assert_eq!(heap.as_slice(), &[0, 1, 4, 2, 3, 10, 12]);
        assert!(heap.is_valid());
    }

    #[test]
    fn delete_out_of_range_is_error_and_noop() {
        let mut heap = MinHeap::from_slice(&L1);
        let before = heap.as_slice().to_vec();
        assert_eq!(
            heap.delete_at(8),
            Err(HeapError::IndexOutOfRange { index: 8, len: 8 })
        );
        assert_eq!(heap.as_slice(), before.as_slice());

        let mut empty: MinHeap<i32> = MinHeap::new();
        assert_eq!(
            empty.delete_at(0),
            Err(HeapError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn delete_every_position() {
        for i in 0..L1.len() {
            let mut heap = MaxHeap::from_slice(&L1);
            let value = heap.as_slice()[i];
            assert_eq!(heap.delete_at(i), Ok(value));
            assert!(heap.is_valid());

            let mut remaining = heap.into_vec();
            remaining.push(value);
            remaining.sort();
            let mut expected = L1.to_vec();
            expected.sort();
            assert_eq!(remaining, expected);
        }
    }

    // ==============================================
    // Misc
    // ==============================================

    #[test]
    fn into_sorted_vec_orders_by_priority() {
        assert_eq!(
            MaxHeap::from_slice(&L1).into_sorted_vec(),
            vec![2, 3, 7, 7, 10, 12, 15, 90]
        );
        assert_eq!(
            MinHeap::from_slice(&L1).into_sorted_vec(),
            vec![90, 15, 12, 10, 7, 7, 3, 2]
        );
        assert!(MinHeap::<i32>::new().into_sorted_vec().is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut heap = MinHeap::with_capacity(16);
        heap.extend(0..10);
        heap.clear();
        assert!(heap.is_empty());
        assert!(heap.capacity() >= 16);
    }

    #[test]
    fn clone_is_independent() {
        let mut heap = MinHeap::from_vec(vec![10, 5]);
        let copy = heap.clone();
        heap.insert(1);
        assert_eq!(heap.len(), 3);
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.peek(), Some(&5));
    }

    #[test]
    fn check_invariants_passes_for_valid_heap() {
        let heap = MaxHeap::from_slice(&L1);
        assert!(heap.check_invariants().is_ok());
    }

    #[test]
    fn check_invariants_names_first_violating_pair() {
        let heap: MinHeap<i32> = BinaryHeap::from_storage(vec![1, 0, 2]);
        assert!(!heap.is_valid());
        let err = heap.check_invariants().unwrap_err();
        assert_eq!(
            err.message(),
            "min-heap property violated: data[0] = 1 above data[1] = 0"
        );

        let heap: MaxHeap<i32> = BinaryHeap::from_storage(vec![9, 4, 5, 1, 6]);
        let err = heap.check_invariants().unwrap_err();
        assert_eq!(
            err.message(),
            "max-heap property violated: data[1] = 4 above data[4] = 6"
        );
    }

    #[test]
    fn heaps_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MinHeap<u32>>();
        assert_send_sync::<MaxHeap<String>>();
        assert_send_sync::<crate::heap::PriorityQueueSet<u32>>();
    }

    #[test]
    fn debug_output_names_order() {
        let heap = MaxHeap::from_vec(vec![1]);
        let dbg = format!("{:?}", heap);
        assert!(dbg.contains("max"));
    }

    #[test]
    fn custom_ord_type() {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
        struct Priority(i32);

        let mut heap = MinHeap::new();
        heap.insert(Priority(30));
        heap.insert(Priority(10));
        heap.insert(Priority(20));
        assert_eq!(heap.extract_top(), Ok(Priority(10)));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_track_operations() {
        let mut heap = MinHeap::from_slice(&L1);
        heap.insert(1);
        let _ = heap.peek();
        heap.extract_top().unwrap();
        heap.delete_at(0).unwrap();
        let _ = heap.delete_at(100);

        let snap = heap.metrics_snapshot();
        assert_eq!(snap.heapify_calls, 1);
        assert!(snap.heapify_swaps > 0);
        assert_eq!(snap.insert_calls, 1);
        assert_eq!(snap.extract_calls, 1);
        assert_eq!(snap.delete_calls, 2);
        assert_eq!(snap.delete_out_of_range, 1);
        assert_eq!(snap.peek_calls, 1);
        assert_eq!(snap.peek_found, 1);
        assert_eq!(snap.heap_len, 7);

        heap.reset_metrics();
        assert_eq!(heap.metrics_snapshot().insert_calls, 0);
    }
}
