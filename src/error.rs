//! Error types for the heapkit library.
//!
//! ## Key Components
//!
//! - [`HeapError`]: Returned when an operation's precondition does not hold
//!   (empty heap, index out of range, rank out of range). Every operation
//!   checks its precondition before touching the heap, so a returned error
//!   means nothing was modified.
//! - [`InvariantError`]: Returned by `check_invariants` methods when the
//!   heap property or a container invariant is violated.
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::error::HeapError;
//! use heapkit::heap::MinHeap;
//!
//! let mut heap: MinHeap<i32> = MinHeap::new();
//! assert_eq!(heap.extract_top(), Err(HeapError::EmptyHeap));
//!
//! heap.insert(4);
//! let err = heap.delete_at(3).unwrap_err();
//! assert_eq!(err, HeapError::IndexOutOfRange { index: 3, len: 1 });
//! assert!(err.to_string().contains("out of range"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// HeapError
// ---------------------------------------------------------------------------

/// Error returned when a heap operation is called outside its contract.
///
/// Element types without a total order are rejected at compile time by the
/// `T: Ord` bound, so there is no runtime variant for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `extract_top` was called on a heap with zero elements.
    EmptyHeap,
    /// `pop_smallest` was called on a priority queue set with zero elements.
    EmptyQueue,
    /// `delete_at` was called with `index >= len`.
    IndexOutOfRange { index: usize, len: usize },
    /// `select_kth` was called with `k` outside `1..=len`.
    InvalidRank { k: usize, len: usize },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => f.write_str("cannot extract from an empty heap"),
            HeapError::EmptyQueue => f.write_str("cannot pop from an empty priority queue"),
            HeapError::IndexOutOfRange { index, len } => write!(
                f,
                "heap index {} out of range for heap of length {}",
                index, len
            ),
            HeapError::InvalidRank { k, len } => write!(
                f,
                "rank {} is invalid for a sequence of length {} (expected 1..={})",
                k, len, len
            ),
        }
    }
}

impl std::error::Error for HeapError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal heap invariants are violated.
///
/// Produced by `check_invariants` methods (e.g.
/// [`BinaryHeap::check_invariants`](crate::heap::BinaryHeap::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
