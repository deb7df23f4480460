//! Binary heap core.
//!
//! - [`index`]: pure parent/child index arithmetic
//! - [`order`]: min/max direction as a type parameter
//! - [`sift`]: percolation primitives over slices
//! - [`binary_heap`]: the owning heap type
//! - [`sort`]: heap-sort and k-th smallest selection
//! - [`pq_set`]: deduplicating priority queue

pub mod binary_heap;
#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod index;
pub mod order;
pub mod pq_set;
pub mod sift;
pub mod sort;

pub use binary_heap::{BinaryHeap, MaxHeap, MinHeap};
#[cfg(feature = "concurrency")]
pub use concurrent::ConcurrentBinaryHeap;
pub use order::{HeapOrder, MaxOrder, MinOrder};
pub use pq_set::PriorityQueueSet;
pub use sift::{heapify, is_valid_heap, sift_down, sift_up};
pub use sort::{SortDirection, heap_sort, heap_sort_in_place, select_kth};
