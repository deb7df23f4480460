pub use crate::error::{HeapError, InvariantError};
pub use crate::heap::{
    BinaryHeap, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder, PriorityQueueSet, SortDirection,
    heap_sort, heapify, is_valid_heap, select_kth,
};

#[cfg(feature = "concurrency")]
pub use crate::heap::ConcurrentBinaryHeap;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::HeapMetricsSnapshot;
