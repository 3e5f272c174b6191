//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* responsibilities into
//! small, composable traits. Policy logic only depends on the recorders.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────────────┐
//!                 │     CoreMetricsRecorder     │
//!                 │  insert/evict/clear (&mut)  │
//!                 └──────────────┬──────────────┘
//!                                │
//!                                ▼
//!                 ┌─────────────────────────────┐     ┌──────────────────────────┐
//!                 │    RandomMetricsRecorder    │     │ CoreMetricsReadRecorder  │
//!                 │  delete hit/miss (&mut)     │     │ get hit/miss (&self)     │
//!                 └─────────────────────────────┘     └──────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! ## Design Goals
//! - **Single responsibility**: recorders only write counters; providers only
//!   read/snapshot; exporters only publish to monitoring systems.
//! - **Shared-reference reads**: `get` takes `&self`, so read counters go
//!   through [`CoreMetricsReadRecorder`] backed by interior mutability.

/// Common counters for mutating cache operations.
pub trait CoreMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Read-path counters for `&self` methods (uses interior mutability).
pub trait CoreMetricsReadRecorder {
    fn record_get_hit(&self);
    fn record_get_miss(&self);
}

/// Metrics specific to the random-eviction cache.
pub trait RandomMetricsRecorder: CoreMetricsRecorder {
    fn record_delete_hit(&mut self);
    fn record_delete_miss(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
