//! randcache: a fixed-capacity key/value cache with O(1) uniform random
//! eviction.
//!
//! The cache is built from three parts kept in lockstep: a fixed-length
//! slot store, a free-slot allocator, and a key → slot index. See
//! [`policy::random`] for the layout and invariants.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
