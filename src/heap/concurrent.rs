//! Mutex-guarded binary heap (feature `concurrency`).
//!
//! Percolation leaves the heap property broken until it finishes, so no two
//! heap operations may interleave. [`ConcurrentBinaryHeap`] holds one
//! `parking_lot::Mutex` for the whole of every operation, reads included.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use heapkit::heap::{ConcurrentBinaryHeap, MinOrder};
//!
//! let heap: Arc<ConcurrentBinaryHeap<u32, MinOrder>> = Arc::new(ConcurrentBinaryHeap::new());
//!
//! let handles: Vec<_> = (0..4u32)
//!     .map(|t| {
//!         let heap = Arc::clone(&heap);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 heap.insert(t * 100 + i);
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(heap.len(), 400);
//! assert_eq!(heap.extract_top(), Ok(0));
//! assert!(heap.is_valid());
//! ```

use std::fmt;

use parking_lot::Mutex;

use super::binary_heap::BinaryHeap;
use super::order::{HeapOrder, MinOrder};
use crate::error::HeapError;

#[cfg(feature = "metrics")]
use crate::metrics::snapshot::HeapMetricsSnapshot;

/// Thread-safe wrapper around [`BinaryHeap`] using a `parking_lot::Mutex`.
pub struct ConcurrentBinaryHeap<T, O = MinOrder> {
    inner: Mutex<BinaryHeap<T, O>>,
}

impl<T, O> ConcurrentBinaryHeap<T, O>
where
    T: Ord,
    O: HeapOrder,
{
    /// Creates an empty concurrent heap.
    pub fn new() -> Self {
        Self::from_heap(BinaryHeap::new())
    }

    /// Creates an empty concurrent heap with reserved capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_heap(BinaryHeap::with_capacity(capacity))
    }

    /// Heapifies `data` and wraps the result.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_heap(BinaryHeap::from_vec(data))
    }

    /// Wraps an existing heap.
    pub fn from_heap(heap: BinaryHeap<T, O>) -> Self {
        Self {
            inner: Mutex::new(heap),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Adds `value`.
    pub fn insert(&self, value: T) {
        let mut heap = self.inner.lock();
        heap.insert(value);
    }

    /// Removes and returns the top element.
    pub fn extract_top(&self) -> Result<T, HeapError> {
        let mut heap = self.inner.lock();
        heap.extract_top()
    }

    /// Tries to remove the top element without blocking.
    ///
    /// Returns `None` if the lock is held elsewhere.
    pub fn try_extract_top(&self) -> Option<Result<T, HeapError>> {
        let mut heap = self.inner.try_lock()?;
        Some(heap.extract_top())
    }

    /// Removes and returns the element at `index`.
    pub fn delete_at(&self, index: usize) -> Result<T, HeapError> {
        let mut heap = self.inner.lock();
        heap.delete_at(index)
    }

    /// Returns a clone of the top element.
    pub fn peek_cloned(&self) -> Option<T>
    where
        T: Clone,
    {
        let heap = self.inner.lock();
        heap.peek().cloned()
    }

    /// Removes all elements.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Returns `true` if the heap property holds.
    pub fn is_valid(&self) -> bool {
        self.inner.lock().is_valid()
    }

    /// Runs `f` with exclusive access to the underlying heap.
    pub fn with_heap<R>(&self, f: impl FnOnce(&mut BinaryHeap<T, O>) -> R) -> R {
        let mut heap = self.inner.lock();
        f(&mut heap)
    }

    /// Consumes the wrapper and returns the heap.
    pub fn into_inner(self) -> BinaryHeap<T, O> {
        self.inner.into_inner()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> HeapMetricsSnapshot {
        self.inner.lock().metrics_snapshot()
    }
}

impl<T, O> Default for ConcurrentBinaryHeap<T, O>
where
    T: Ord,
    O: HeapOrder,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> fmt::Debug for ConcurrentBinaryHeap<T, O>
where
    T: fmt::Debug,
    O: HeapOrder,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(heap) => f
                .debug_struct("ConcurrentBinaryHeap")
                .field("inner", &*heap)
                .finish(),
            None => f
                .debug_struct("ConcurrentBinaryHeap")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
