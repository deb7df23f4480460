//! Optional operation counters for heaps (feature `metrics`).
//!
//! Recording lives in [`HeapMetrics`](metrics_impl::HeapMetrics) and is
//! exposed to callers only as a plain-data
//! [`HeapMetricsSnapshot`](snapshot::HeapMetricsSnapshot).

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
