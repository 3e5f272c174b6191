use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    CoreMetricsReadRecorder, CoreMetricsRecorder, MetricsReset, RandomMetricsRecorder,
};

// ---------------------------------------------------------------------------
// RandomMetrics
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RandomMetrics {
    pub get_calls: MetricsCell,
    pub get_hits: MetricsCell,
    pub get_misses: MetricsCell,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub delete_calls: u64,
    pub delete_hits: u64,
    pub delete_misses: u64,
    pub clears: u64,
}

impl CoreMetricsRecorder for RandomMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }
    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }
    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }
    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }
    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl CoreMetricsReadRecorder for RandomMetrics {
    fn record_get_hit(&self) {
        self.get_calls.incr();
        self.get_hits.incr();
    }
    fn record_get_miss(&self) {
        self.get_calls.incr();
        self.get_misses.incr();
    }
}

impl RandomMetricsRecorder for RandomMetrics {
    fn record_delete_hit(&mut self) {
        self.delete_calls += 1;
        self.delete_hits += 1;
    }
    fn record_delete_miss(&mut self) {
        self.delete_calls += 1;
        self.delete_misses += 1;
    }
}

impl MetricsReset for RandomMetrics {
    fn reset_metrics(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_recorder_counts_through_shared_ref() {
        let metrics = RandomMetrics::default();
        metrics.record_get_hit();
        metrics.record_get_hit();
        metrics.record_get_miss();
        assert_eq!(metrics.get_calls.get(), 3);
        assert_eq!(metrics.get_hits.get(), 2);
        assert_eq!(metrics.get_misses.get(), 1);
    }

    #[test]
    fn delete_counters_split_hits_and_misses() {
        let mut metrics = RandomMetrics::default();
        metrics.record_delete_hit();
        metrics.record_delete_miss();
        metrics.record_delete_miss();
        assert_eq!(metrics.delete_calls, 3);
        assert_eq!(metrics.delete_hits, 1);
        assert_eq!(metrics.delete_misses, 2);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut metrics = RandomMetrics::default();
        metrics.record_insert_call();
        metrics.record_evicted_entry();
        metrics.record_get_hit();
        metrics.reset_metrics();
        assert_eq!(metrics.insert_calls, 0);
        assert_eq!(metrics.evicted_entries, 0);
        assert_eq!(metrics.get_calls.get(), 0);
    }
}
