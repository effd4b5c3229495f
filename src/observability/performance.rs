use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::core::{OperationTiming, PerformanceReport};

#[derive(Default)]
struct TimingEntry {
    count: u64,
    total: Duration,
}

/// Analysis-scoped timing collector.
///
/// Cheap to clone (an `Arc` around a `Mutex`) so the same tracker can be
/// handed to both branches of the `rayon::join` that runs the frequent-set
/// miner and the BEM analyzer concurrently; each branch only ever locks it
/// for the instant a span starts or ends, so contention between the two is
/// negligible.
#[derive(Clone, Default)]
pub struct PerformanceTracker {
    entries: Arc<Mutex<BTreeMap<&'static str, TimingEntry>>>,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timing `operation`; the duration is recorded when the
    /// returned guard is dropped.
    #[must_use]
    pub fn span(&self, operation: &'static str) -> TimingGuard<'_> {
        TimingGuard {
            tracker: self,
            operation,
            start: Instant::now(),
        }
    }

    fn record(&self, operation: &'static str, duration: Duration) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let entry = entries.entry(operation).or_default();
        entry.count += 1;
        entry.total += duration;
    }

    pub fn report(&self) -> PerformanceReport {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .iter()
            .map(|(name, entry)| {
                let mean = if entry.count > 0 {
                    entry.total.as_secs_f64() / entry.count as f64
                } else {
                    0.0
                };
                (
                    name.to_string(),
                    OperationTiming {
                        count: entry.count,
                        total_seconds: entry.total.as_secs_f64(),
                        mean_seconds: mean,
                    },
                )
            })
            .collect()
    }
}

/// RAII guard returned by `PerformanceTracker::span`.
pub struct TimingGuard<'a> {
    tracker: &'a PerformanceTracker,
    operation: &'static str,
    start: Instant,
}

impl Drop for TimingGuard<'_> {
    fn drop(&mut self) {
        self.tracker.record(self.operation, self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_count_and_mean() {
        let tracker = PerformanceTracker::new();
        for _ in 0..3 {
            let _guard = tracker.span("demo");
        }
        let report = tracker.report();
        let demo = &report["demo"];
        assert_eq!(demo.count, 3);
        assert!(demo.mean_seconds >= 0.0);
    }
}
