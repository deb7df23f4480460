//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and resetting are split into small traits so the
//! heap code only ever sees the recorder side.
//!
//! ```text
//!   ┌─────────────────────────────┐     ┌─────────────────────────────┐
//!   │     HeapMetricsRecorder     │     │   HeapMetricsReadRecorder   │
//!   │  insert/extract/delete      │     │  peek (through &self)       │
//!   │  sift swaps/heapify/clear   │     │                             │
//!   └──────────────┬──────────────┘     └──────────────┬──────────────┘
//!                  │                                   │
//!                  └─────────────┬─────────────────────┘
//!                                ▼
//!                 ┌──────────────────────────────┐
//!                 │ MetricsSnapshotProvider<S>   │
//!                 │ MetricsReset                 │
//!                 └──────────────────────────────┘
//! ```

/// Counters for mutating heap operations.
pub trait HeapMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_extract_call(&mut self);
    fn record_extract_empty(&mut self);
    fn record_delete_call(&mut self);
    fn record_delete_out_of_range(&mut self);
    fn record_sift_up_swaps(&mut self, swaps: usize);
    fn record_sift_down_swaps(&mut self, swaps: usize);
    fn record_heapify(&mut self, swaps: usize);
    fn record_clear(&mut self);
}

/// Counters for `&self` heap operations (interior mutability).
pub trait HeapMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Produce a point-in-time copy of the counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}
