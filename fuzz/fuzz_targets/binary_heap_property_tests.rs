#![no_main]

use heapkit::heap::{
    MaxOrder, MinHeap, MinOrder, SortDirection, heap_sort, heapify, is_valid_heap, select_kth,
};
use libfuzzer_sys::fuzz_target;

// Fuzz property-based tests for the heap algorithms
//
// Tests specific properties:
// - Heapify yields a valid heap with the same elements
// - Heap-sort matches the standard library sort
// - select_kth matches the sorted sequence
// - Extraction order matches heap-sort
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let test_type = data[0] % 4;

    match test_type {
        0 => test_heapify_permutation(&data[1..]),
        1 => test_heap_sort(&data[1..]),
        2 => test_select_kth(data[1], &data[2..]),
        3 => test_extraction_order(&data[1..]),
        _ => unreachable!(),
    }
});

// Property: heapify keeps the multiset and establishes the heap property
fn test_heapify_permutation(data: &[u8]) {
    let mut min = data.to_vec();
    heapify::<_, MinOrder>(&mut min);
    assert!(is_valid_heap::<_, MinOrder>(&min));

    let mut max = data.to_vec();
    let swaps = heapify::<_, MaxOrder>(&mut max);
    assert!(is_valid_heap::<_, MaxOrder>(&max));
    assert!(swaps <= data.len());

    let mut expected = data.to_vec();
    expected.sort();
    min.sort();
    max.sort();
    assert_eq!(min, expected);
    assert_eq!(max, expected);
}

// Property: heap_sort agrees with sort() in both directions
fn test_heap_sort(data: &[u8]) {
    let mut expected = data.to_vec();
    expected.sort();
    assert_eq!(heap_sort(data, SortDirection::Ascending), expected);

    expected.reverse();
    assert_eq!(heap_sort(data, SortDirection::Descending), expected);
}

// Property: select_kth(k) == sorted[k - 1], and invalid ranks are rejected
fn test_select_kth(rank: u8, data: &[u8]) {
    let k = rank as usize;
    let result = select_kth(data, k);
    if k == 0 || k > data.len() {
        assert!(result.is_err());
        return;
    }
    let sorted = heap_sort(data, SortDirection::Ascending);
    assert_eq!(result, Ok(sorted[k - 1]));
}

// Property: extracting everything from a min-heap yields ascending order
fn test_extraction_order(data: &[u8]) {
    let mut heap = MinHeap::from_slice(data);
    let mut out = Vec::with_capacity(data.len());
    while let Ok(v) = heap.extract_top() {
        out.push(v);
    }
    assert_eq!(out, heap_sort(data, SortDirection::Ascending));
}
