#![no_main]

use std::collections::BTreeSet;

use heapkit::heap::PriorityQueueSet;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on PriorityQueueSet
//
// Mirrors every add/pop/has_item against a BTreeSet model.
fuzz_target!(|data: &[u8]| {
    let mut queue: PriorityQueueSet<u8> = PriorityQueueSet::new();
    let mut model: BTreeSet<u8> = BTreeSet::new();

    for chunk in data.chunks(2) {
        if chunk.len() < 2 {
            break;
        }
        let op = chunk[0] % 3;
        let value = chunk[1];

        match op {
            0 => {
                // add
                assert_eq!(queue.add(value), model.insert(value));
            }
            1 => {
                // pop_smallest
                let expected = model.iter().next().copied();
                match queue.pop_smallest() {
                    Ok(v) => {
                        assert_eq!(Some(v), expected);
                        model.remove(&v);
                    }
                    Err(_) => assert!(expected.is_none()),
                }
            }
            2 => {
                // has_item
                assert_eq!(queue.has_item(&value), model.contains(&value));
            }
            _ => unreachable!(),
        }

        assert_eq!(queue.len(), model.len());
        assert!(queue.check_invariants().is_ok());
    }
});
