//! Heap-sort and k-th order statistics.
//!
//! Both algorithms reuse the slice primitives from [`sift`](super::sift):
//!
//! ```text
//!   heap_sort (ascending):
//!     heapify as max-heap ──► repeat: swap(0, end); sift_down(0, end)
//!                              [ heap prefix | sorted suffix ▶ ]
//!
//!   select_kth(k):
//!     heapify as min-heap ──► k times: swap(0, end); sift_down(0, end)
//!                              [ heap prefix | k smallest, descending ]
//!                              answer at index n - k
//! ```
//!
//! Inputs are borrowed and copied; callers keep their sequence unchanged.
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::heap::{heap_sort, select_kth, SortDirection};
//!
//! let l1 = [90, 15, 10, 7, 12, 2, 7, 3];
//! assert_eq!(heap_sort(&l1, SortDirection::Ascending), vec![2, 3, 7, 7, 10, 12, 15, 90]);
//! assert_eq!(select_kth(&l1, 3), Ok(7));
//! ```

use log::debug;

use super::order::{MaxOrder, MinOrder};
use super::sift::{heapify, sift_down};
use crate::error::HeapError;

/// Output order for [`heap_sort`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Non-decreasing.
    #[default]
    Ascending,
    /// Non-increasing.
    Descending,
}

/// Returns a sorted copy of `items`.
///
/// O(n log n) comparisons, no allocation beyond the copy.
pub fn heap_sort<T: Ord + Clone>(items: &[T], direction: SortDirection) -> Vec<T> {
    let mut sorted = items.to_vec();
    heap_sort_in_place(&mut sorted, direction);
    sorted
}

/// Sorts `data` in place with heap-sort.
///
/// Always builds a max-heap, which leaves the slice ascending; descending
/// output is produced by reversing that result.
pub fn heap_sort_in_place<T: Ord>(data: &mut [T], direction: SortDirection) {
    let swaps = heapify::<T, MaxOrder>(data);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down::<T, MaxOrder>(data, 0, end);
    }
    if direction == SortDirection::Descending {
        data.reverse();
    }
    debug!(
        "heap-sorted {} elements {:?} (heapify swaps: {})",
        data.len(),
        direction,
        swaps
    );
}

/// Returns the `k`-th smallest element of `items` (1-indexed).
///
/// Runs a partial heap-sort over a min-heap: after `k` extractions the
/// `k` smallest values sit at the tail in descending order, and the answer
/// is at index `n - k`. O(n + k log n).
///
/// # Errors
///
/// Returns [`HeapError::InvalidRank`] if `k == 0` or `k > items.len()`.
///
/// # Example
///
/// ```
/// use heapkit::error::HeapError;
/// use heapkit::heap::select_kth;
///
/// let values = [4, 1, 3, 1];
/// assert_eq!(select_kth(&values, 1), Ok(1));
/// assert_eq!(select_kth(&values, 2), Ok(1));
/// assert_eq!(select_kth(&values, 4), Ok(4));
/// assert_eq!(select_kth(&values, 0), Err(HeapError::InvalidRank { k: 0, len: 4 }));
/// ```
pub fn select_kth<T: Ord + Clone>(items: &[T], k: usize) -> Result<T, HeapError> {
    let n = items.len();
    if k == 0 || k > n {
        return Err(HeapError::InvalidRank { k, len: n });
    }

    let mut scratch = items.to_vec();
    heapify::<T, MinOrder>(&mut scratch);
    for i in 0..k {
        let end = n - i - 1;
        scratch.swap(0, end);
        sift_down::<T, MinOrder>(&mut scratch, 0, end);
    }
    debug!("selected rank {} of {} elements", k, n);

    Ok(scratch.swap_remove(n - k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::order::MinOrder;
    use crate::heap::sift::is_valid_heap;

    const L1: [i32; 8] = [90, 15, 10, 7, 12, 2, 7, 3];
    const L2: [i32; 7] = [90, 15, 10, 7, 12, 2, 17];
    const L3: [i32; 2] = [-2, -1];

    // ==============================================
    // heap_sort
    // ==============================================

    #[test]
    fn heap_sort_reference_inputs() {
        assert_eq!(
            heap_sort(&L1, SortDirection::Ascending),
            vec![2, 3, 7, 7, 10, 12, 15, 90]
        );
        assert_eq!(
            heap_sort(&L2, SortDirection::Ascending),
            vec![2, 7, 10, 12, 15, 17, 90]
        );
        assert_eq!(heap_sort(&L3, SortDirection::Ascending), vec![-2, -1]);
    }

    #[test]
    fn heap_sort_descending() {
        assert_eq!(
            heap_sort(&L1, SortDirection::Descending),
            vec![90, 15, 12, 10, 7, 7, 3, 2]
        );
    }

    #[test]
    fn heap_sort_leaves_input_untouched() {
        let input = L1.to_vec();
        let _ = heap_sort(&input, SortDirection::Ascending);
        assert_eq!(input, L1.to_vec());
    }

    #[test]
    fn heap_sort_trivial_inputs() {
        let empty: [u8; 0] = [];
        assert!(heap_sort(&empty, SortDirection::Ascending).is_empty());
        assert_eq!(heap_sort(&[7], SortDirection::Descending), vec![7]);
    }

    #[test]
    fn heap_sort_is_idempotent() {
        let once = heap_sort(&L1, SortDirection::Ascending);
        assert_eq!(heap_sort(&once, SortDirection::Ascending), once);

        let once = heap_sort(&L1, SortDirection::Descending);
        assert_eq!(heap_sort(&once, SortDirection::Descending), once);
    }

    #[test]
    fn heap_sort_strings() {
        let words = ["pear", "apple", "fig", "banana"];
        assert_eq!(
            heap_sort(&words, SortDirection::Ascending),
            vec!["apple", "banana", "fig", "pear"]
        );
    }

    #[test]
    fn heap_sort_in_place_sorts_slice() {
        let mut data = [5, 4, 3, 2, 1, 0];
        heap_sort_in_place(&mut data, SortDirection::Ascending);
        assert_eq!(data, [0, 1, 2, 3, 4, 5]);
    }

    // ==============================================
    // select_kth
    // ==============================================

    #[test]
    fn select_kth_reference_input() {
        assert_eq!(select_kth(&L1, 3), Ok(7));
        assert_eq!(select_kth(&L1, 1), Ok(2));
        assert_eq!(select_kth(&L1, 8), Ok(90));
    }

    #[test]
    fn select_kth_every_rank_matches_sort() {
        let sorted = heap_sort(&L1, SortDirection::Ascending);
        for k in 1..=L1.len() {
            assert_eq!(select_kth(&L1, k), Ok(sorted[k - 1]));
        }
    }

    #[test]
    fn select_kth_invalid_rank() {
        assert_eq!(
            select_kth(&L1, 0),
            Err(HeapError::InvalidRank { k: 0, len: 8 })
        );
        assert_eq!(
            select_kth(&L1, 9),
            Err(HeapError::InvalidRank { k: 9, len: 8 })
        );
        let empty: [i32; 0] = [];
        assert_eq!(
            select_kth(&empty, 1),
            Err(HeapError::InvalidRank { k: 1, len: 0 })
        );
    }

    #[test]
    fn select_kth_leaves_prefix_as_heap() {
        // Re-run the partial sort by hand to check the intermediate state.
        let mut scratch = L1.to_vec();
        heapify::<_, MinOrder>(&mut scratch);
        let n = scratch.len();
        for i in 0..3 {
            let end = n - i - 1;
            scratch.swap(0, end);
            sift_down::<_, MinOrder>(&mut scratch, 0, end);
            assert!(is_valid_heap::<_, MinOrder>(&scratch[..end]));
        }
        assert_eq!(&scratch[n - 3..], &[7, 3, 2]);
    }
}
