//! Optional operation counters for [`RandomCache`](crate::policy::random::RandomCache).
//!
//! Enabled with the `metrics` feature. Recording, snapshotting and export are
//! split across [`traits`] so that the cache only ever writes counters.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
