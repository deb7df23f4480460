/// Point-in-time copy of a heap's counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeapMetricsSnapshot {
    pub insert_calls: u64,

    pub extract_calls: u64,
    pub extract_empty: u64, // calls rejected with EmptyHeap

    pub delete_calls: u64,
    pub delete_out_of_range: u64,

    pub sift_up_swaps: u64,
    pub sift_down_swaps: u64,

    pub heapify_calls: u64,
    pub heapify_swaps: u64,

    pub peek_calls: u64,
    pub peek_found: u64,

    pub clear_calls: u64,

    // gauge captured at snapshot time
    pub heap_len: usize,
}

impl HeapMetricsSnapshot {
    /// Total swaps performed by all percolation, including heap construction.
    pub fn total_swaps(&self) -> u64 {
        self.sift_up_swaps + self.sift_down_swaps + self.heapify_swaps
    }
}
