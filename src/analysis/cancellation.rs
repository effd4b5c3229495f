use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cooperative cancellation flag polled at discrete points: between
/// levels in the miner, between components in the BEM analyzer, between
/// rules in metrics aggregation. Cancellation is advisory — already-started
/// per-level work completes; the caller observes a partially populated
/// `AnalysisResult` rather than an error.
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
