//! heapkit: array-backed binary heaps and the algorithms built on them.
//!
//! - [`heap`]: `BinaryHeap<T, O>`, percolation primitives, heap-sort,
//!   k-th smallest selection and a deduplicating priority queue
//! - [`error`]: `HeapError` and `InvariantError`
//! - [`text`]: a small string utility independent of the heap core
//!
//! See `DESIGN.md` for the module map and invariants.
//!
//! ```
//! use heapkit::prelude::*;
//!
//! let l1 = [90, 15, 10, 7, 12, 2, 7, 3];
//!
//! let mut heap = MinHeap::from_slice(&l1);
//! assert!(heap.is_valid());
//! assert_eq!(heap.extract_top(), Ok(2));
//!
//! assert_eq!(heap_sort(&l1, SortDirection::Ascending), [2, 3, 7, 7, 10, 12, 15, 90]);
//! assert_eq!(select_kth(&l1, 3), Ok(7));
//! ```

pub mod error;
pub mod heap;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod text;
