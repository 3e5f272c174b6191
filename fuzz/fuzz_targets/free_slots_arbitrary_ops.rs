#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use randcache::ds::{FreeSlots, ReuseOrder};

// Fuzz arbitrary acquire/release/reset sequences on FreeSlots
//
// Tracks the set of handed-out slots and checks that acquire never returns
// a slot that is already out, and that free + out always equals capacity.
// Release candidates are drawn from every index, so already-free slots come
// up too; those must be listed by `iter` and are never released (a second
// release panics, which libFuzzer would report as a crash).
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 32) + 1;
    let order = if data[1] & 1 == 0 {
        ReuseOrder::Lifo
    } else {
        ReuseOrder::Fifo
    };
    let mut free = FreeSlots::new(capacity, order);
    let mut out = Vec::new();
    let mut out_set = HashSet::new();

    for &byte in &data[2..] {
        match byte % 4 {
            0 => {
                // acquire
                match free.acquire() {
                    Some(slot) => {
                        assert!(slot.index() < capacity);
                        assert!(out_set.insert(slot), "slot handed out twice");
                        out.push(slot);
                    }
                    None => assert_eq!(out.len(), capacity),
                }
            }
            1 => {
                // release
                if !out.is_empty() {
                    let slot = out.swap_remove(usize::from(byte) % out.len());
                    out_set.remove(&slot);
                    free.release(slot);

                    let next = match order {
                        ReuseOrder::Lifo => free.acquire(),
                        ReuseOrder::Fifo => None,
                    };
                    if let Some(next) = next {
                        assert_eq!(next, slot, "lifo must hand back the last release");
                        out_set.insert(next);
                        out.push(next);
                    }
                }
            }
            2 => {
                // reset
                if byte % 7 == 0 {
                    free.reset();
                    out.clear();
                    out_set.clear();
                    assert_eq!(free.len(), capacity);
                }
            }
            3 => {
                // release an arbitrary index; already-free ones are skipped
                let idx = usize::from(byte) % capacity;
                match out.iter().position(|s| s.index() == idx) {
                    Some(pos) => {
                        let slot = out.swap_remove(pos);
                        out_set.remove(&slot);
                        free.release(slot);
                        assert_eq!(free.iter().filter(|s| *s == slot).count(), 1);
                    }
                    None => assert!(
                        free.iter().any(|s| s.index() == idx),
                        "slot {} neither out nor free",
                        idx
                    ),
                }
            }
            _ => unreachable!(),
        }

        assert_eq!(free.len() + out.len(), capacity);
        assert_eq!(free.is_empty(), out.len() == capacity);
        assert_eq!(free.iter().count(), free.len());
    }
});
