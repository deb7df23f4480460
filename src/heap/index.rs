//! Implicit complete-binary-tree indexing.
//!
//! A heap of length `n` stores its tree in `data[0..n]`:
//!
//! ```text
//!                    [0]
//!                  /     \
//!               [1]       [2]
//!              /   \     /   \
//!            [3]   [4] [5]   [6]
//!
//!   parent(i)      = (i - 1) / 2      (i > 0)
//!   left_child(i)  = 2i + 1
//!   right_child(i) = 2i + 2
//! ```
//!
//! Every index `>= n / 2` is a leaf, so `n / 2 - 1` is the last node with at
//! least one child.

/// Returns the parent index of `index`, or `None` for the root.
#[inline]
pub const fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Returns the left child index of `index`.
#[inline]
pub const fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Returns the right child index of `index`.
#[inline]
pub const fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Returns the index of the last internal (non-leaf) node for a tree of
/// `len` nodes, or `None` when every node is a leaf.
#[inline]
pub const fn last_internal(len: usize) -> Option<usize> {
    if len < 2 { None } else { Some(len / 2 - 1) }
}
