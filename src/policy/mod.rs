//! Eviction policies.

pub mod random;
