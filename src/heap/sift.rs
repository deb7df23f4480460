//! Percolation primitives over plain slices.
//!
//! Everything else in the crate is built from [`sift_down`] and [`sift_up`].
//! They work on `&mut [T]` rather than on a heap type so that heap-sort and
//! selection can run them over a shrinking prefix of a scratch buffer.
//!
//! ## Operations
//!
//! | Operation        | Description                                   | Complexity |
//! |------------------|-----------------------------------------------|------------|
//! | `sift_down`      | Push `data[index]` down inside `data[..len]`  | O(log n)   |
//! | `sift_up`        | Pull `data[index]` up toward the root         | O(log n)   |
//! | `heapify`        | Bottom-up heap construction                   | O(n)       |
//! | `is_valid_heap`  | Check the heap property                       | O(n)       |
//!
//! All functions return the number of swaps they performed; the heap type
//! feeds these into its metrics and the tests use them to bound work.
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::heap::{heapify, is_valid_heap, MinOrder};
//!
//! let mut data = vec![90, 15, 10, 7, 12, 2, 7, 3];
//! heapify::<_, MinOrder>(&mut data);
//! assert!(is_valid_heap::<_, MinOrder>(&data));
//! assert_eq!(data[0], 2);
//! ```

use super::index::{last_internal, left_child, parent, right_child};
use super::order::HeapOrder;

/// Restores the heap property at `index` within `data[..len]`.
///
/// Assumes both child subtrees of `index` are already valid heaps. The
/// element is swapped with its more extreme child while that child precedes
/// it; on a tie between the two children the left one is taken.
///
/// Returns the number of swaps performed. Does nothing if `index >= len`.
///
/// # Panics
///
/// Panics if `len > data.len()`.
pub fn sift_down<T: Ord, O: HeapOrder>(data: &mut [T], mut index: usize, len: usize) -> usize {
    assert!(len <= data.len(), "sift_down length {} exceeds slice length {}", len, data.len());
    // Child index math overflows for indices past usize::MAX / 2.
    if index >= len {
        return 0;
    }
    let mut swaps = 0;
    loop {
        let left = left_child(index);
        if left >= len {
            return swaps;
        }
        let right = right_child(index);
        let mut best = left;
        if right < len && O::precedes(&data[right], &data[left]) {
            best = right;
        }
        if !O::precedes(&data[best], &data[index]) {
            return swaps;
        }
        data.swap(index, best);
        swaps += 1;
        index = best;
    }
}

/// Moves `data[index]` toward the root while it precedes its parent.
///
/// Returns the number of swaps performed.
///
/// # Panics
///
/// Panics if `index >= data.len()`.
pub fn sift_up<T: Ord, O: HeapOrder>(data: &mut [T], mut index: usize) -> usize {
    assert!(index < data.len(), "sift_up index {} out of bounds for length {}", index, data.len());
    let mut swaps = 0;
    while let Some(up) = parent(index) {
        if !O::precedes(&data[index], &data[up]) {
            break;
        }
        data.swap(index, up);
        swaps += 1;
        index = up;
    }
    swaps
}

/// Rearranges `data` into a valid heap in place.
///
/// Runs [`sift_down`] from the last internal node back to the root. Leaves
/// are already one-element heaps, and walking indices in decreasing order
/// means both subtrees of a node are heaps by the time it is visited. Total
/// work is O(n); the returned swap count never exceeds `data.len()`.
pub fn heapify<T: Ord, O: HeapOrder>(data: &mut [T]) -> usize {
    let len = data.len();
    let Some(last) = last_internal(len) else {
        return 0;
    };
    let mut swaps = 0;
    for index in (0..=last).rev() {
        swaps += sift_down::<T, O>(data, index, len);
    }
    swaps
}

/// Returns `true` if `data` satisfies the heap property for order `O`.
///
/// Empty and single-element slices are valid heaps.
pub fn is_valid_heap<T: Ord, O: HeapOrder>(data: &[T]) -> bool {
    first_violation::<T, O>(data).is_none()
}

/// Returns the first `(parent, child)` pair that breaks the heap property.
pub(crate) fn first_violation<T: Ord, O: HeapOrder>(data: &[T]) -> Option<(usize, usize)> {
    let len = data.len();
    for index in 0..len / 2 {
        let left = left_child(index);
        if O::precedes(&data[left], &data[index]) {
            return Some((index, left));
        }
        let right = right_child(index);
        if right < len && O::precedes(&data[right], &data[index]) {
            return Some((index, right));
        }
    }
    None
}
