//! The style analysis pipeline: rule extraction, co-occurrence, frequent-set
//! mining, clustering, statistics, BEM naming analysis, suggestion
//! synthesis, and metrics, tied together by `engine::analyze`.

pub mod bem;
pub mod cancellation;
pub mod clusters;
pub mod cooccurrence;
mod engine;
pub mod metrics;
pub mod miner;
pub mod rule_extractor;
pub mod statistics;
pub mod suggestions;

pub use cancellation::CancellationToken;
pub use engine::analyze;

use crate::core::{AnalysisConfig, BemAnalysis, StyleCorpus};
use crate::observability::PerformanceTracker;

/// Runs the BEM analyzer alone, independent of mining/clustering/metrics.
pub fn bem_analyze(corpus: &StyleCorpus) -> BemAnalysis {
    bem::analyze_bem(
        corpus,
        AnalysisConfig::default().style_similarity_extension,
        &PerformanceTracker::new(),
    )
}
