use heapkit::heap::{MaxOrder, MinHeap, SortDirection, heap_sort, is_valid_heap, select_kth};

fn main() {
    env_logger::init();

    let l1 = [90, 15, 10, 7, 12, 2, 7, 3];
    let l2 = [90, 15, 10, 7, 12, 2, 17];
    let l3 = [-2, -1];

    for list in [&l1[..], &l2[..], &l3[..]] {
        println!("{:?} max-heap? {}", list, is_valid_heap::<_, MaxOrder>(list));
    }

    for list in [&l1[..], &l2[..], &l3[..]] {
        println!("sorted: {:?}", heap_sort(list, SortDirection::Ascending));
    }

    match select_kth(&l1, 3) {
        Ok(v) => println!("3rd smallest of l1: {}", v),
        Err(err) => println!("select_kth failed: {}", err),
    }

    let mut heap = MinHeap::from_slice(&l1);
    println!("heap: {:?} valid? {}", heap.as_slice(), heap.is_valid());

    if let Ok(top) = heap.extract_top() {
        println!("extracted top: {}", top);
    }
    if let Ok(removed) = heap.delete_at(2) {
        println!("deleted at 2: {}", removed);
    }
    println!("still valid? {}", heap.is_valid());
    println!("drained: {:?}", heap.into_sorted_vec());
}

// Expected output:
// [90, 15, 10, 7, 12, 2, 7, 3] max-heap? true
// [90, 15, 10, 7, 12, 2, 17] max-heap? false
// [-2, -1] max-heap? false
// sorted: [2, 3, 7, 7, 10, 12, 15, 90]
// sorted: [2, 7, 10, 12, 15, 17, 90]
// sorted: [-2, -1]
// 3rd smallest of l1: 7
// heap: [2, 3, 7, 7, 12, 10, 90, 15] valid? true
// extracted top: 2
// deleted at 2: 7
// still valid? true
// drained: [90, 15, 12, 10, 7, 3]
//
// Explanation: l1 already satisfies the max-heap property; l2 fails because
// 17 sits below 10. into_sorted_vec drains a min-heap with the top element
// last, so the survivors come out in descending order.
