use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::{HeapMetricsReadRecorder, HeapMetricsRecorder, MetricsReset};

#[derive(Debug, Default, Clone)]
pub struct HeapMetrics {
    pub insert_calls: u64,
    pub extract_calls: u64,
    pub extract_empty: u64,
    pub delete_calls: u64,
    pub delete_out_of_range: u64,
    pub sift_up_swaps: u64,
    pub sift_down_swaps: u64,
    pub heapify_calls: u64,
    pub heapify_swaps: u64,
    pub clear_calls: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

impl HeapMetrics {
    pub fn new() -> HeapMetrics {
        Self::default()
    }

    /// Copies the counters out, attaching the current heap length.
    pub fn snapshot_with_len(&self, heap_len: usize) -> HeapMetricsSnapshot {
        HeapMetricsSnapshot {
            insert_calls: self.insert_calls,
            extract_calls: self.extract_calls,
            extract_empty: self.extract_empty,
            delete_calls: self.delete_calls,
            delete_out_of_range: self.delete_out_of_range,
            sift_up_swaps: self.sift_up_swaps,
            sift_down_swaps: self.sift_down_swaps,
            heapify_calls: self.heapify_calls,
            heapify_swaps: self.heapify_swaps,
            peek_calls: self.peek_calls.get(),
            peek_found: self.peek_found.get(),
            clear_calls: self.clear_calls,
            heap_len,
        }
    }
}

impl HeapMetricsRecorder for HeapMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_extract_call(&mut self) {
        self.extract_calls += 1;
    }

    fn record_extract_empty(&mut self) {
        self.extract_empty += 1;
    }

    fn record_delete_call(&mut self) {
        self.delete_calls += 1;
    }

    fn record_delete_out_of_range(&mut self) {
        self.delete_out_of_range += 1;
    }

    fn record_sift_up_swaps(&mut self, swaps: usize) {
        self.sift_up_swaps += swaps as u64;
    }

    fn record_sift_down_swaps(&mut self, swaps: usize) {
        self.sift_down_swaps += swaps as u64;
    }

    fn record_heapify(&mut self, swaps: usize) {
        self.heapify_calls += 1;
        self.heapify_swaps += swaps as u64;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl HeapMetricsReadRecorder for &HeapMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}

impl MetricsReset for HeapMetrics {
    fn reset_metrics(&mut self) {
        *self = HeapMetrics::default();
    }
}
