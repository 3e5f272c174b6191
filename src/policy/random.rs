//! Random cache replacement policy.
//!
//! A fixed-capacity cache that, once full, makes room for a new key by
//! evicting a uniformly random occupied slot. No recency or frequency state
//! is kept; reads never influence which entry goes next.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                      RandomCache<K, V, R> Layout                            │
//! │                                                                             │
//! │   index: KeyIndex<K>            store: SlotStore<K, V>  (fixed length)      │
//! │   key → SlotId                                                              │
//! │                                 ┌─────────┬─────────┬─────────┬─────────┐   │
//! │   ┌──────────┬────────┐         │    0    │    1    │    2    │    3    │   │
//! │   │  "page1" │   0    │────────►│ (p1,v1) │  empty  │ (p3,v3) │ (p2,v2) │   │
//! │   │  "page2" │   3    │───┐     └─────────┴─────────┴─────────┴─────────┘   │
//! │   │  "page3" │   2    │─┐ │          ▲                   ▲         ▲        │
//! │   └──────────┴────────┘ │ └──────────┼───────────────────┼─────────┘        │
//! │                         └────────────┼───────────────────┘                  │
//! │                                      │                                      │
//! │   free: FreeSlots   recycled [1]  ───┘   fresh cursor = 4 (exhausted)       │
//! │                                                                             │
//! │   Invariants:                                                               │
//! │     every bound key points at an occupied slot holding that key             │
//! │     occupied slots == bound keys <= capacity                                │
//! │     free slots and occupied slots partition [0, capacity)                   │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//! put(key, value)
//! ───────────────
//!   1. key bound to slot s?   overwrite value at s, done (no eviction)
//!   2. free.acquire() = s?    write (key, value) at s, bind key → s
//!   3. otherwise (full):      evict_random(), then step 2 again
//!
//! evict_random()   (store full, so every slot is occupied)
//! ──────────────
//!   1. s = uniform draw from [0, capacity)
//!   2. clear slot s, yielding the victim key
//!   3. unbind victim key, release s to the free pool
//!   4. replacements += 1
//! ```
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `get`       | O(1)   | Hash lookup + slot read                    |
//! | `put`       | O(1)   | May trigger one random eviction            |
//! | `delete`    | O(1)   | Slot returns to the free pool              |
//! | `contains`  | O(1)   | Hash lookup only                           |
//! | `clear`     | O(n)   | Empties every slot                         |
//!
//! ## Example Usage
//!
//! ```
//! use randcache::policy::random::RandomCache;
//!
//! let mut cache = RandomCache::with_seed(3, 42).unwrap();
//! cache.put(1, 1);
//! cache.put(2, 2);
//! cache.put(3, 3);
//! assert_eq!(cache.replacement_count(), 0);
//!
//! // Full: one of 1, 2, 3 is evicted at random.
//! cache.put(4, 4);
//! assert_eq!(cache.replacement_count(), 1);
//! assert_eq!(cache.get(&4), Ok(&4));
//! assert_eq!(cache.len(), 3);
//! ```
//!
//! ## Thread Safety
//!
//! [`RandomCache`] is single-threaded. Every operation runs to completion
//! without blocking; for shared use, wrap the whole cache in one exclusive
//! lock taken around each call.
//!
//! ## Implementation Notes
//!
//! - Slots are sparse with holes: deleting never moves another entry, so a
//!   live key keeps its slot until it is deleted or evicted.
//! - The eviction draw uses the cache's own RNG (`SmallRng` by default);
//!   a fixed seed reproduces the same victims for the same operation sequence.
//! - A draw that lands on a free slot, or a slot whose key is unbound, is a
//!   bookkeeping bug and panics rather than surfacing as an error.

use std::fmt;
use std::hash::Hash;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ds::{FreeSlots, KeyIndex, ReuseOrder, SlotId, SlotStore};
use crate::error::{CacheError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::RandomMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::RandomMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsReadRecorder, CoreMetricsRecorder, MetricsReset, MetricsSnapshotProvider,
    RandomMetricsRecorder,
};
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

/// Fixed-capacity cache with uniform random eviction.
///
/// Composes a [`SlotStore`] (the entries), a [`FreeSlots`] allocator (unused
/// slot indices) and a [`KeyIndex`] (key → slot), and keeps the three in
/// lockstep on every mutation.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash` (stored in both the slot and
///   the index)
/// - `V`: Value type
/// - `R`: Random number generator used for victim selection
///
/// # Example
///
/// ```
/// use randcache::error::CacheError;
/// use randcache::policy::random::RandomCache;
///
/// let mut cache = RandomCache::with_seed(100, 7).unwrap();
/// cache.put("key1", "value1");
/// assert_eq!(cache.get(&"key1"), Ok(&"value1"));
///
/// // Overwrite keeps the slot and never evicts
/// assert_eq!(cache.put("key1", "new_value"), Some("value1"));
///
/// assert_eq!(cache.delete(&"key1"), Ok("new_value"));
/// assert_eq!(cache.get(&"key1"), Err(CacheError::KeyNotFound));
/// ```
pub struct RandomCache<K, V, R = SmallRng> {
    store: SlotStore<K, V>,
    free: FreeSlots,
    index: KeyIndex<K>,
    rng: R,
    /// Evictions performed since construction.
    replacements: u64,
    #[cfg(feature = "metrics")]
    metrics: RandomMetrics,
}

impl<K, V> RandomCache<K, V, SmallRng>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache whose eviction RNG is seeded from the operating system.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use randcache::policy::random::RandomCache;
    ///
    /// let cache: RandomCache<String, i32> = RandomCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    ///
    /// assert!(RandomCache::<String, i32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        Self::with_rng(capacity, SmallRng::from_os_rng())
    }

    /// Creates a cache with a deterministic eviction sequence.
    pub fn with_seed(capacity: usize, seed: u64) -> Result<Self, CacheError> {
        Self::with_rng(capacity, SmallRng::seed_from_u64(seed))
    }
}

impl<K, V, R> RandomCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: Rng,
{
    /// Creates a cache that draws victims from `rng`.
    pub fn with_rng(capacity: usize, rng: R) -> Result<Self, CacheError> {
        Self::with_rng_and_order(capacity, rng, ReuseOrder::default())
    }

    /// Creates a cache that draws victims from `rng` and reuses freed slots
    /// in `order`.
    pub fn with_rng_and_order(
        capacity: usize,
        rng: R,
        order: ReuseOrder,
    ) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity { capacity });
        }
        debug!(
            "random cache created: capacity={}, reuse_order={:?}",
            capacity, order
        );
        Ok(Self {
            store: SlotStore::new(capacity),
            free: FreeSlots::new(capacity, order),
            index: KeyIndex::with_capacity(capacity),
            rng,
            replacements: 0,
            #[cfg(feature = "metrics")]
            metrics: RandomMetrics::default(),
        })
    }

    /// Inserts or overwrites `key`.
    ///
    /// - Existing key: the value is replaced in place and the old value
    ///   returned. No slot changes hands and nothing is evicted.
    /// - New key with a free slot: the entry takes that slot.
    /// - New key with the cache full: one uniformly random entry is evicted
    ///   first, incrementing [`replacement_count`](Self::replacement_count).
    ///
    /// # Example
    ///
    /// ```
    /// use randcache::policy::random::RandomCache;
    ///
    /// let mut cache = RandomCache::with_seed(2, 1).unwrap();
    /// assert_eq!(cache.put("a", 1), None);
    /// assert_eq!(cache.put("a", 2), Some(1));
    /// assert_eq!(cache.len(), 1);
    /// assert_eq!(cache.replacement_count(), 0);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(slot) = self.index.lookup(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let Some(current) = self.store.value_mut(slot) else {
                panic!("key bound to free slot {}", slot.index());
            };
            return Some(std::mem::replace(current, value));
        }

        let slot = match self.free.acquire() {
            Some(slot) => slot,
            None => {
                self.evict_random();
                let Some(slot) = self.free.acquire() else {
                    panic!("eviction did not free a slot");
                };
                slot
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        self.store.write(slot, key.clone(), value);
        self.index.bind(key, slot);

        #[cfg(debug_assertions)]
        self.validate_invariants();

        None
    }

    /// Evicts the entry in a uniformly drawn slot.
    ///
    /// Only called when the store has no free slot, so every index in
    /// `[0, capacity)` is occupied and the draw is uniform over live entries.
    fn evict_random(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        debug_assert!(self.free.is_empty(), "eviction with free slots available");

        let slot = SlotId(self.rng.random_range(0..self.store.capacity()));
        let Some((victim, _)) = self.store.clear(slot) else {
            panic!("eviction drew free slot {}", slot.index());
        };
        match self.index.unbind(&victim) {
            Ok(bound) => assert_eq!(bound, slot, "victim bound to another slot"),
            Err(_) => panic!("victim in slot {} has no key binding", slot.index()),
        }
        self.free.release(slot);
        self.replacements += 1;

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();

        trace!(
            "evicted slot {} (replacements={})",
            slot.index(),
            self.replacements
        );
    }

    /// Empties every slot.
    ///
    /// The replacement counter is kept: it counts evictions since
    /// construction, and clearing is not an eviction.
    pub fn clear(&mut self) {
        self.store.clear_all();
        self.index.clear();
        self.free.reset();

        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        debug!("random cache cleared: capacity={}", self.store.capacity());

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }
}

impl<K, V, R> RandomCache<K, V, R>
where
    K: Clone + Eq + Hash,
{
    /// Returns the value bound to `key`.
    ///
    /// Reads have no side effects on eviction.
    ///
    /// # Example
    ///
    /// ```
    /// use randcache::error::CacheError;
    /// use randcache::policy::random::RandomCache;
    ///
    /// let mut cache = RandomCache::with_seed(10, 3).unwrap();
    /// cache.put("key", 42);
    ///
    /// assert_eq!(cache.get(&"key"), Ok(&42));
    /// assert_eq!(cache.get(&"missing"), Err(CacheError::KeyNotFound));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V, CacheError> {
        let Some(slot) = self.index.lookup(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return Err(CacheError::KeyNotFound);
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        match self.store.read(slot) {
            Some((_, value)) => Ok(value),
            None => panic!("key bound to free slot {}", slot.index()),
        }
    }

    /// Returns a mutable reference to the value bound to `key`.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, CacheError> {
        let Some(slot) = self.index.lookup(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return Err(CacheError::KeyNotFound);
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        match self.store.value_mut(slot) {
            Some(value) => Ok(value),
            None => panic!("key bound to free slot {}", slot.index()),
        }
    }

    /// Removes `key`, returning its value. Exactly one slot becomes free.
    ///
    /// # Example
    ///
    /// ```
    /// use randcache::error::CacheError;
    /// use randcache::policy::random::RandomCache;
    ///
    /// let mut cache = RandomCache::with_seed(1, 3).unwrap();
    /// cache.put("a", 1);
    /// assert_eq!(cache.delete(&"a"), Ok(1));
    /// assert_eq!(cache.delete(&"a"), Err(CacheError::KeyNotFound));
    ///
    /// // The freed slot absorbs the next key without eviction.
    /// cache.put("b", 2);
    /// assert_eq!(cache.replacement_count(), 0);
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<V, CacheError> {
        let slot = match self.index.unbind(key) {
            Ok(slot) => slot,
            Err(err) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_delete_miss();
                return Err(err);
            },
        };
        let Some((_, value)) = self.store.clear(slot) else {
            panic!("key bound to free slot {}", slot.index());
        };
        self.free.release(slot);

        #[cfg(feature = "metrics")]
        self.metrics.record_delete_hit();

        #[cfg(debug_assertions)]
        self.validate_invariants();

        Ok(value)
    }

    /// Number of evictions performed since construction.
    #[inline]
    pub fn replacement_count(&self) -> u64 {
        self.replacements
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Number of slots not backing any key.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Returns the physical slot currently holding `key`.
    #[inline]
    pub fn slot_of(&self, key: &K) -> Option<SlotId> {
        self.index.lookup(key)
    }

    #[inline]
    pub fn reuse_order(&self) -> ReuseOrder {
        self.free.order()
    }

    /// Iterates live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.store.iter().map(|(_, k, v)| (k, v))
    }

    /// Audits the slot store, free-slot allocator and key index against each
    /// other. O(capacity).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let capacity = self.store.capacity();

        if self.index.len() != self.store.len() {
            return Err(InvariantError::new(format!(
                "{} keys bound but {} slots occupied",
                self.index.len(),
                self.store.len()
            )));
        }
        if self.store.len() > capacity {
            return Err(InvariantError::new(format!(
                "{} slots occupied exceeds capacity {}",
                self.store.len(),
                capacity
            )));
        }
        if self.store.len() + self.free.len() != capacity {
            return Err(InvariantError::new(format!(
                "occupied ({}) + free ({}) != capacity ({})",
                self.store.len(),
                self.free.len(),
                capacity
            )));
        }

        for (key, slot) in self.index.iter() {
            match self.store.read(slot) {
                Some((stored, _)) if stored == key => {},
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "slot {} holds a different key than its binding",
                        slot.index()
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "key bound to free slot {}",
                        slot.index()
                    )));
                },
            }
        }

        let mut seen = vec![false; capacity];
        for slot in self.free.iter() {
            if slot.index() >= capacity {
                return Err(InvariantError::new(format!(
                    "free slot {} out of range",
                    slot.index()
                )));
            }
            if std::mem::replace(&mut seen[slot.index()], true) {
                return Err(InvariantError::new(format!(
                    "slot {} listed free twice",
                    slot.index()
                )));
            }
            if self.store.is_occupied(slot) {
                return Err(InvariantError::new(format!(
                    "slot {} is both free and occupied",
                    slot.index()
                )));
            }
        }

        Ok(())
    }

    /// Cheap count checks run after every mutation in debug builds.
    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert_eq!(
            self.index.len(),
            self.store.len(),
            "bound keys and occupied slots diverged"
        );
        debug_assert_eq!(
            self.store.len() + self.free.len(),
            self.store.capacity(),
            "occupied and free slots do not partition the store"
        );
    }
}

#[cfg(feature = "metrics")]
impl<K, V, R> RandomCache<K, V, R>
where
    K: Clone + Eq + Hash,
{
    /// Returns a snapshot of cache metrics.
    pub fn metrics_snapshot(&self) -> RandomMetricsSnapshot {
        RandomMetricsSnapshot {
            get_calls: self.metrics.get_calls.get(),
            get_hits: self.metrics.get_hits.get(),
            get_misses: self.metrics.get_misses.get(),
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            delete_calls: self.metrics.delete_calls,
            delete_hits: self.metrics.delete_hits,
            delete_misses: self.metrics.delete_misses,
            clears: self.metrics.clears,
            cache_len: self.len(),
            free_slots: self.free_slots(),
            capacity: self.capacity(),
        }
    }

    /// Zeroes the metric counters. The replacement counter is not affected.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

#[cfg(feature = "metrics")]
impl<K, V, R> MetricsSnapshotProvider<RandomMetricsSnapshot> for RandomCache<K, V, R>
where
    K: Clone + Eq + Hash,
{
    fn snapshot(&self) -> RandomMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V, R> fmt::Debug for RandomCache<K, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomCache")
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .field("replacements", &self.replacements)
            .finish_non_exhaustive()
    }
}

/// Renders live entries as `{k: v, k: v}` in slot order.
impl<K, V, R> fmt::Display for RandomCache<K, V, R>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (_, key, value)) in self.store.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}

impl<K, V, R> ReadOnlyCache<K, V> for RandomCache<K, V, R>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.store.capacity()
    }
}

/// Allows `RandomCache` to be used through the unified cache interface.
///
/// # Example
///
/// ```
/// use randcache::policy::random::RandomCache;
/// use randcache::traits::{CoreCache, ReadOnlyCache};
///
/// let mut cache: RandomCache<&str, i32> = RandomCache::with_seed(100, 0).unwrap();
///
/// CoreCache::insert(&mut cache, "key", 42);
/// assert_eq!(CoreCache::get(&mut cache, &"key"), Some(&42));
/// assert!(ReadOnlyCache::contains(&cache, &"key"));
/// ```
impl<K, V, R> CoreCache<K, V> for RandomCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: Rng,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        RandomCache::get(self, key).ok()
    }

    fn clear(&mut self) {
        RandomCache::clear(self);
    }
}

impl<K, V, R> MutableCache<K, V> for RandomCache<K, V, R>
where
    K: Clone + Eq + Hash,
    R: Rng,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        self.delete(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded<K: Clone + Eq + Hash, V>(capacity: usize) -> RandomCache<K, V> {
        RandomCache::with_seed(capacity, 0x5eed).unwrap()
    }

    // ==============================================
    // Construction
    // ==============================================

    mod construction {
        use super::*;

        #[test]
        fn new_cache_is_empty() {
            let cache: RandomCache<&str, i32> = seeded(100);
            assert!(cache.is_empty());
            assert_eq!(cache.len(), 0);
            assert_eq!(cache.capacity(), 100);
            assert_eq!(cache.free_slots(), 100);
            assert_eq!(cache.replacement_count(), 0);
        }

        #[test]
        fn zero_capacity_is_rejected() {
            let err = RandomCache::<&str, i32>::new(0).unwrap_err();
            assert_eq!(err, CacheError::InvalidCapacity { capacity: 0 });

            let err = RandomCache::<&str, i32>::with_seed(0, 1).unwrap_err();
            assert_eq!(err, CacheError::InvalidCapacity { capacity: 0 });
        }

        #[test]
        fn os_seeded_cache_works() {
            let mut cache = RandomCache::new(2).unwrap();
            for i in 0..10 {
                cache.put(i, i);
            }
            assert_eq!(cache.len(), 2);
            assert_eq!(cache.replacement_count(), 8);
        }

        #[test]
        fn custom_rng_and_order() {
            let rng = SmallRng::seed_from_u64(9);
            let cache: RandomCache<u8, u8, _> =
                RandomCache::with_rng_and_order(4, rng, ReuseOrder::Fifo).unwrap();
            assert_eq!(cache.reuse_order(), ReuseOrder::Fifo);
        }
    }

    // ==============================================
    // Basic Operations
    // ==============================================

    mod basic_operations {
        use super::*;

        #[test]
        fn put_and_get() {
            let mut cache = seeded(100);
            cache.put("key1", "value1");

            assert_eq!(cache.len(), 1);
            assert_eq!(cache.get(&"key1"), Ok(&"value1"));
        }

        #[test]
        fn put_multiple_items() {
            let mut cache = seeded(100);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("c", 3);

            assert_eq!(cache.len(), 3);
            assert_eq!(cache.get(&"a"), Ok(&1));
            assert_eq!(cache.get(&"b"), Ok(&2));
            assert_eq!(cache.get(&"c"), Ok(&3));
        }

        #[test]
        fn get_missing_key_fails() {
            let cache: RandomCache<&str, i32> = seeded(100);
            assert_eq!(cache.get(&"missing"), Err(CacheError::KeyNotFound));
        }

        #[test]
        fn overwrite_keeps_slot() {
            let mut cache = seeded(100);
            cache.put("key", "initial");
            let slot = cache.slot_of(&"key");
            assert_eq!(cache.put("key", "updated"), Some("initial"));

            assert_eq!(cache.len(), 1);
            assert_eq!(cache.get(&"key"), Ok(&"updated"));
            assert_eq!(cache.slot_of(&"key"), slot);
        }

        #[test]
        fn get_mut_updates_value() {
            let mut cache = seeded(4);
            cache.put(1, String::from("a"));
            cache.get_mut(&1).unwrap().push('b');
            assert_eq!(cache.get(&1).map(String::as_str), Ok("ab"));
            assert_eq!(cache.get_mut(&2), Err(CacheError::KeyNotFound));
        }

        #[test]
        fn delete_returns_value_and_frees_slot() {
            let mut cache = seeded(3);
            cache.put("a", 1);
            cache.put("b", 2);
            assert_eq!(cache.free_slots(), 1);

            assert_eq!(cache.delete(&"a"), Ok(1));
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.free_slots(), 2);
            assert!(!cache.contains(&"a"));
        }

        #[test]
        fn delete_missing_key_fails() {
            let mut cache: RandomCache<&str, i32> = seeded(3);
            assert_eq!(cache.delete(&"nope"), Err(CacheError::KeyNotFound));
            cache.put("a", 1);
            cache.delete(&"a").unwrap();
            assert_eq!(cache.delete(&"a"), Err(CacheError::KeyNotFound));
        }

        #[test]
        fn clear_removes_all_entries_but_keeps_counter() {
            let mut cache = seeded(2);
            for i in 0..5 {
                cache.put(i, i);
            }
            assert_eq!(cache.replacement_count(), 3);

            cache.clear();

            assert!(cache.is_empty());
            assert_eq!(cache.free_slots(), 2);
            assert_eq!(cache.replacement_count(), 3);
            assert!(cache.check_invariants().is_ok());

            cache.put(10, 10);
            cache.put(11, 11);
            assert_eq!(cache.replacement_count(), 3);
        }

        #[test]
        fn iter_yields_live_entries() {
            let mut cache = seeded(5);
            for i in 0..5 {
                cache.put(i, i * 10);
            }
            cache.delete(&2).unwrap();
            let mut entries: Vec<_> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            entries.sort_unstable();
            assert_eq!(entries, vec![(0, 0), (1, 10), (3, 30), (4, 40)]);
        }
    }

    // ==============================================
    // Random Eviction Behavior
    // ==============================================

    mod eviction_behavior {
        use super::*;

        #[test]
        fn eviction_maintains_capacity() {
            let mut cache = seeded(3);

            cache.put(1, 10);
            cache.put(2, 20);
            cache.put(3, 30);
            assert_eq!(cache.len(), 3);
            assert_eq!(cache.replacement_count(), 0);

            cache.put(4, 40);
            assert_eq!(cache.len(), 3);
            assert_eq!(cache.replacement_count(), 1);

            cache.put(5, 50);
            assert_eq!(cache.len(), 3);
            assert_eq!(cache.replacement_count(), 2);
        }

        #[test]
        fn each_eviction_removes_exactly_one_old_key() {
            let mut cache = seeded(4);
            for i in 0..4 {
                cache.put(i, i);
            }
            for new_key in 4..50 {
                let before: Vec<i32> = cache.iter().map(|(k, _)| *k).collect();
                cache.put(new_key, new_key);
                let lost = before.iter().filter(|k| !cache.contains(k)).count();
                assert_eq!(lost, 1);
                assert_eq!(cache.get(&new_key), Ok(&new_key));
            }
            assert_eq!(cache.replacement_count(), 46);
        }

        #[test]
        fn new_key_takes_the_victims_slot() {
            let mut cache = seeded(3);
            for i in 0..3 {
                cache.put(i, i);
            }
            let slots: Vec<_> = (0..3).map(|k| cache.slot_of(&k).unwrap()).collect();
            cache.put(3, 3);
            let victim = (0..3).find(|k| !cache.contains(k)).unwrap();
            assert_eq!(cache.slot_of(&3), Some(slots[victim as usize]));
        }

        #[test]
        fn overwrite_when_full_does_not_evict() {
            let mut cache = seeded(2);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("a", 3);
            assert_eq!(cache.replacement_count(), 0);
            assert_eq!(cache.get(&"a"), Ok(&3));
            assert_eq!(cache.get(&"b"), Ok(&2));
        }

        #[test]
        fn delete_then_put_when_full_does_not_evict() {
            let mut cache = seeded(3);
            for i in 0..3 {
                cache.put(i, i);
            }
            cache.delete(&1).unwrap();
            cache.put(7, 7);
            assert_eq!(cache.replacement_count(), 0);
            assert_eq!(cache.len(), 3);
        }

        #[test]
        fn get_does_not_trigger_eviction() {
            let mut cache = seeded(2);
            cache.put(1, 1);
            cache.put(2, 2);
            for _ in 0..100 {
                let _ = cache.get(&1);
                let _ = cache.get(&3);
            }
            assert_eq!(cache.replacement_count(), 0);
            assert_eq!(cache.len(), 2);
        }

        #[test]
        fn single_capacity_cache() {
            let mut cache = seeded(1);
            cache.put("a", 1);
            cache.put("b", 2);
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.get(&"b"), Ok(&2));
            assert_eq!(cache.get(&"a"), Err(CacheError::KeyNotFound));
            assert_eq!(cache.replacement_count(), 1);
        }

        #[test]
        fn same_seed_same_victims() {
            let mut a = RandomCache::with_seed(8, 1234).unwrap();
            let mut b = RandomCache::with_seed(8, 1234).unwrap();
            for i in 0..200 {
                a.put(i, i);
                b.put(i, i);
            }
            let mut left: Vec<_> = a.iter().map(|(k, _)| *k).collect();
            let mut right: Vec<_> = b.iter().map(|(k, _)| *k).collect();
            left.sort_unstable();
            right.sort_unstable();
            assert_eq!(left, right);
        }

        #[test]
        fn fifo_reuse_order_behaves_the_same() {
            let rng = SmallRng::seed_from_u64(5);
            let mut cache = RandomCache::with_rng_and_order(4, rng, ReuseOrder::Fifo).unwrap();
            for i in 0..4 {
                cache.put(i, i);
            }
            cache.delete(&0).unwrap();
            cache.delete(&2).unwrap();
            cache.put(10, 10);
            cache.put(11, 11);
            cache.put(12, 12);
            assert_eq!(cache.len(), 4);
            assert_eq!(cache.replacement_count(), 1);
            assert!(cache.check_invariants().is_ok());
        }
    }

    // ==============================================
    // Invariants and Formatting
    // ==============================================

    mod invariants {
        use super::*;

        #[test]
        fn invariants_hold_after_mixed_churn() {
            let mut cache = seeded(10);
            for i in 0..500u32 {
                cache.put(i % 37, i);
                if i % 3 == 0 {
                    let _ = cache.delete(&(i % 11));
                }
                assert!(cache.check_invariants().is_ok());
            }
        }

        #[test]
        fn len_equals_capacity_minus_free() {
            let mut cache = seeded(6);
            for i in 0..20 {
                cache.put(i, ());
                assert_eq!(cache.len() + cache.free_slots(), cache.capacity());
            }
        }

        #[test]
        fn display_renders_snapshot() {
            let mut cache = seeded(3);
            cache.put(1, 10);
            cache.put(2, 20);
            assert_eq!(cache.to_string(), "{1: 10, 2: 20}");

            let empty: RandomCache<u8, u8> = seeded(2);
            assert_eq!(empty.to_string(), "{}");
        }

        #[test]
        fn debug_shows_counts() {
            let mut cache = seeded(2);
            cache.put(1, 1);
            let dbg = format!("{:?}", cache);
            assert!(dbg.contains("RandomCache"));
            assert!(dbg.contains("capacity: 2"));
            assert!(dbg.contains("len: 1"));
        }
    }

    // ==============================================
    // Trait Interface
    // ==============================================

    mod trait_interface {
        use super::*;

        #[test]
        fn core_cache_insert_get() {
            let mut cache: RandomCache<u32, u32> = seeded(4);
            assert_eq!(CoreCache::insert(&mut cache, 1, 10), None);
            assert_eq!(CoreCache::insert(&mut cache, 1, 11), Some(10));
            assert_eq!(CoreCache::get(&mut cache, &1), Some(&11));
            assert_eq!(CoreCache::get(&mut cache, &2), None);
            assert_eq!(ReadOnlyCache::len(&cache), 1);
            assert_eq!(ReadOnlyCache::capacity(&cache), 4);
        }

        #[test]
        fn mutable_cache_remove_batch() {
            let mut cache: RandomCache<u32, &str> = seeded(4);
            cache.put(1, "one");
            cache.put(2, "two");
            cache.put(3, "three");
            let removed = MutableCache::remove_batch(&mut cache, &[1, 99, 3]);
            assert_eq!(removed, vec![Some("one"), None, Some("three")]);
            assert_eq!(cache.len(), 1);
        }
    }

    // ==============================================
    // Metrics
    // ==============================================

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn snapshot_tracks_operations() {
            let mut cache = seeded(2);
            cache.put(1, 1);
            cache.put(2, 2);
            cache.put(1, 3);
            cache.put(3, 3);
            let _ = cache.get(&3);
            let _ = cache.get(&99);
            let _ = cache.delete(&3);
            let _ = cache.delete(&3);

            let snap = cache.metrics_snapshot();
            assert_eq!(snap.insert_calls, 4);
            assert_eq!(snap.insert_new, 3);
            assert_eq!(snap.insert_updates, 1);
            assert_eq!(snap.evict_calls, 1);
            assert_eq!(snap.evicted_entries, 1);
            assert_eq!(snap.get_hits, 1);
            assert_eq!(snap.get_misses, 1);
            assert_eq!(snap.delete_hits, 1);
            assert_eq!(snap.delete_misses, 1);
            assert_eq!(snap.cache_len, 1);
            assert_eq!(snap.free_slots, 1);
            assert_eq!(snap.capacity, 2);
        }

        #[test]
        fn get_mut_counts_as_get() {
            let mut cache = seeded(2);
            cache.put(1, 1);
            *cache.get_mut(&1).unwrap() = 5;
            assert!(cache.get_mut(&2).is_err());
            let _ = cache.get(&1);

            let snap = cache.metrics_snapshot();
            assert_eq!(snap.get_calls, 3);
            assert_eq!(snap.get_hits, 2);
            assert_eq!(snap.get_misses, 1);
        }

        #[test]
        fn reset_keeps_replacement_count() {
            let mut cache = seeded(1);
            cache.put(1, 1);
            cache.put(2, 2);
            cache.reset_metrics();
            assert_eq!(cache.snapshot().evicted_entries, 0);
            assert_eq!(cache.replacement_count(), 1);
        }
    }
}
