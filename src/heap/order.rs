//! Heap order selection.
//!
//! A single percolation core serves both min-heaps and max-heaps. The
//! direction is a zero-sized type parameter, so the comparison is resolved
//! at compile time and carries no runtime state.
//!
//! ```
//! use heapkit::heap::{HeapOrder, MaxOrder, MinOrder};
//!
//! assert!(MinOrder::precedes(&1, &2));
//! assert!(MaxOrder::precedes(&2, &1));
//! assert!(!MinOrder::precedes(&2, &2));
//! ```

use std::fmt::Debug;

/// Direction of a binary heap.
///
/// `precedes(a, b)` is `true` when `a` must sit strictly above `b` in the
/// tree. Equal elements never precede each other, which keeps percolation
/// from swapping ties.
pub trait HeapOrder: Copy + Default + Debug + 'static {
    /// Human-readable name used in invariant messages.
    const NAME: &'static str;

    fn precedes<T: Ord + ?Sized>(a: &T, b: &T) -> bool;
}

/// Smallest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

/// Largest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl HeapOrder for MinOrder {
    const NAME: &'static str = "min";

    #[inline]
    fn precedes<T: Ord + ?Sized>(a: &T, b: &T) -> bool {
        a < b
    }
}

impl HeapOrder for MaxOrder {
    const NAME: &'static str = "max";

    #[inline]
    fn precedes<T: Ord + ?Sized>(a: &T, b: &T) -> bool {
        a > b
    }
}
