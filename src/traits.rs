//! # Cache Trait Hierarchy
//!
//! A small, statically dispatched interface over cache implementations so
//! that generic code (benchmarks, profiling drivers, complexity tests) can
//! drive a cache without naming its concrete type.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │          ReadOnlyCache<K, V>            │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │  remove(&mut, &K) → Option<V>           │
//!   │  remove_batch(&mut, &[K])               │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! The trait methods return `Option` rather than `Result`: absence is the
//! normal outcome of a cache probe in generic code. The concrete cache types
//! expose `Result`-returning inherent methods for callers that want
//! [`CacheError::KeyNotFound`](crate::error::CacheError::KeyNotFound).
//!
//! ## Example
//!
//! ```
//! use randcache::policy::random::RandomCache;
//! use randcache::traits::{CoreCache, MutableCache, ReadOnlyCache};
//!
//! fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
//!     for (key, value) in data {
//!         cache.insert(*key, value.clone());
//!     }
//! }
//!
//! fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
//!     for key in keys {
//!         cache.remove(key);
//!     }
//! }
//!
//! let mut cache = RandomCache::with_seed(100, 1).unwrap();
//! warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
//! invalidate_keys(&mut cache, &[1]);
//! assert_eq!(ReadOnlyCache::len(&cache), 1);
//! ```
//!
//! ## Thread Safety
//!
//! Cache implementations are **not** thread-safe. Wrap them in a single
//! exclusive lock (e.g. `Mutex<C>`) around every call for shared access.

/// Read-only cache inspection. Never changes cache state.
pub trait ReadOnlyCache<K, V> {
    /// Checks if a key exists.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity of the cache.
    fn capacity(&self) -> usize;
}

/// Core cache operations that all caches support.
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity, an entry may be evicted according to the
    /// cache's eviction policy before the new entry is inserted.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Removes all entries from the cache.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it didn't.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys.
    ///
    /// Returns a vector of `Option<V>` in the same order as the input keys.
    /// The default implementation loops over [`remove`](Self::remove).
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}
