#![no_main]

use std::collections::HashMap;

use libfuzzer_sys::fuzz_target;
use randcache::ds::ReuseOrder;
use randcache::error::CacheError;
use randcache::policy::random::RandomCache;
use rand::SeedableRng;
use rand::rngs::SmallRng;

// Fuzz arbitrary operation sequences on RandomCache
//
// The first two bytes pick capacity and reuse order, the rest are
// (op, key) pairs. A shadow map tracks which keys must still be resident:
// only puts of new keys into a full cache may drop a key, and only one.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 16) + 1;
    let order = if data[1] & 1 == 0 {
        ReuseOrder::Lifo
    } else {
        ReuseOrder::Fifo
    };
    let rng = SmallRng::seed_from_u64(u64::from(data[1]));
    let mut cache: RandomCache<u8, u32, SmallRng> =
        match RandomCache::with_rng_and_order(capacity, rng, order) {
            Ok(cache) => cache,
            Err(_) => return,
        };
    let mut shadow: HashMap<u8, u32> = HashMap::new();
    let mut step = 0u32;

    let mut idx = 2;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let key = data[idx + 1] % 32;
        step += 1;

        match op {
            0 => {
                // put
                let was_full = cache.len() == capacity;
                let existed = shadow.contains_key(&key);
                let before = cache.replacement_count();

                let old = cache.put(key, step);
                assert_eq!(old, shadow.get(&key).copied());

                if existed || !was_full {
                    assert_eq!(cache.replacement_count(), before);
                } else {
                    assert_eq!(cache.replacement_count(), before + 1);
                    // Drop whichever shadow entry the cache evicted.
                    shadow.retain(|k, _| cache.contains(k));
                }
                shadow.insert(key, step);
            }
            1 => {
                // get
                match shadow.get(&key) {
                    Some(value) => assert_eq!(cache.get(&key), Ok(value)),
                    None => assert_eq!(cache.get(&key), Err(CacheError::KeyNotFound)),
                }
            }
            2 => {
                // delete
                let expected = shadow.remove(&key);
                match cache.delete(&key) {
                    Ok(value) => assert_eq!(Some(value), expected),
                    Err(err) => {
                        assert_eq!(err, CacheError::KeyNotFound);
                        assert_eq!(expected, None);
                    }
                }
                assert!(!cache.contains(&key));
            }
            3 => {
                // get_mut
                if let Ok(value) = cache.get_mut(&key) {
                    *value = step;
                    shadow.insert(key, step);
                }
            }
            4 => {
                // clear
                let before = cache.replacement_count();
                cache.clear();
                shadow.clear();
                assert!(cache.is_empty());
                assert_eq!(cache.free_slots(), capacity);
                assert_eq!(cache.replacement_count(), before);
            }
            _ => unreachable!(),
        }

        assert_eq!(cache.len(), shadow.len());
        assert!(cache.len() <= capacity);
        assert_eq!(cache.len() + cache.free_slots(), capacity);
        assert!(cache.check_invariants().is_ok());

        idx += 2;
    }
});
