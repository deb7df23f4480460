#![no_main]

use heapkit::heap::{MaxHeap, MinHeap};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on MinHeap and MaxHeap
//
// Tests random sequences of insert, extract_top, delete_at, peek and clear,
// checking the heap property after every step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut min: MinHeap<u8> = MinHeap::new();
    let mut max: MaxHeap<u8> = MaxHeap::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let arg = data[idx + 1];

        match op {
            0 | 1 => {
                // insert
                min.insert(arg);
                max.insert(arg);
                assert!(min.peek().is_some_and(|&top| top <= arg));
                assert!(max.peek().is_some_and(|&top| top >= arg));
            }
            2 => {
                // extract_top
                let old_len = min.len();
                let expected_min = min.peek().copied();
                match min.extract_top() {
                    Ok(v) => {
                        assert_eq!(Some(v), expected_min);
                        assert_eq!(min.len(), old_len - 1);
                    }
                    Err(_) => assert_eq!(old_len, 0),
                }
                let expected_max = max.peek().copied();
                if let Ok(v) = max.extract_top() {
                    assert_eq!(Some(v), expected_max);
                }
            }
            3 => {
                // delete_at
                let index = arg as usize;
                let old_len = min.len();
                match min.delete_at(index) {
                    Ok(_) => assert_eq!(min.len(), old_len - 1),
                    Err(_) => {
                        assert!(index >= old_len);
                        assert_eq!(min.len(), old_len);
                    }
                }
                let _ = max.delete_at(index);
            }
            4 => {
                // peek
                if let (Some(&lo), Some(&hi)) = (min.peek(), max.peek()) {
                    assert!(lo <= hi);
                }
            }
            5 => {
                // clear (rarely)
                if arg == 0 {
                    min.clear();
                    max.clear();
                    assert!(min.is_empty());
                    assert!(max.is_empty());
                }
            }
            _ => unreachable!(),
        }

        assert!(min.is_valid());
        assert!(max.is_valid());
        idx += 2;
    }
});
