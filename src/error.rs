//! Error types for the randcache library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by the public cache operations. Construction
//!   fails with [`CacheError::InvalidCapacity`]; lookups and deletes of an
//!   absent key fail with [`CacheError::KeyNotFound`].
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` audits).
//!
//! ## Example Usage
//!
//! ```
//! use randcache::error::CacheError;
//! use randcache::policy::random::RandomCache;
//!
//! let bad = RandomCache::<u64, u64>::new(0);
//! assert_eq!(bad.unwrap_err(), CacheError::InvalidCapacity { capacity: 0 });
//!
//! let mut cache = RandomCache::with_seed(4, 7).unwrap();
//! cache.put(1, "one");
//! assert_eq!(cache.get(&2), Err(CacheError::KeyNotFound));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Error returned by cache construction and key-addressed operations.
///
/// `InvalidCapacity` is fatal for the cache being built: no cache exists
/// afterwards. `KeyNotFound` is recoverable; the caller decides whether the
/// absence was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity cannot back a cache (it must be > 0).
    InvalidCapacity { capacity: usize },
    /// The key is not bound to any slot.
    KeyNotFound,
}

impl CacheError {
    /// Returns `true` for [`CacheError::KeyNotFound`].
    #[inline]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, CacheError::KeyNotFound)
    }
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::InvalidCapacity { capacity } => {
                write!(f, "invalid capacity {}: capacity must be > 0", capacity)
            },
            CacheError::KeyNotFound => f.write_str("key not found"),
        }
    }
}

impl std::error::Error for CacheError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`RandomCache::check_invariants`](crate::policy::random::RandomCache::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
