//! Configuration builder for [`RandomCache`].
//!
//! Collects the construction-time knobs (capacity, RNG seed, slot reuse
//! order) and validates them in one place.
//!
//! ## Example
//!
//! ```rust
//! use randcache::builder::CacheBuilder;
//! use randcache::ds::ReuseOrder;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .seed(42)
//!     .reuse_order(ReuseOrder::Fifo)
//!     .build::<u64, String>()
//!     .unwrap();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Ok(&"hello".to_string()));
//!
//! assert!(CacheBuilder::new(0).build::<u64, String>().is_err());
//! ```

use std::hash::Hash;

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::ds::ReuseOrder;
use crate::error::CacheError;
use crate::policy::random::RandomCache;

/// Builder for [`RandomCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBuilder {
    capacity: usize,
    seed: Option<u64>,
    reuse_order: ReuseOrder,
}

impl CacheBuilder {
    /// Starts a builder for a cache of `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            seed: None,
            reuse_order: ReuseOrder::default(),
        }
    }

    /// Seeds the eviction RNG so victim choice is reproducible.
    ///
    /// Without a seed the RNG is seeded from the operating system.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets which released slot is reused first.
    pub fn reuse_order(mut self, order: ReuseOrder) -> Self {
        self.reuse_order = order;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Builds the cache, failing with [`CacheError::InvalidCapacity`] when
    /// the capacity is 0.
    pub fn build<K, V>(self) -> Result<RandomCache<K, V>, CacheError>
    where
        K: Clone + Eq + Hash,
    {
        let rng = match self.seed {
            Some(seed) => {
                debug!("seeding eviction rng with {}", seed);
                SmallRng::seed_from_u64(seed)
            },
            None => SmallRng::from_os_rng(),
        };
        RandomCache::with_rng_and_order(self.capacity, rng, self.reuse_order)
    }
}
