//! Domain types shared by every stage of the style analysis engine.
//!
//! Nothing in this module does I/O, parses text, or retains state across
//! calls: these are the plain data shapes the pipeline in
//! `styleloom::analysis` reads and writes.

mod cluster;
mod config;
mod corpus;
mod property_map;
mod result;

pub use cluster::{Cluster, FrequentSet};
pub use config::AnalysisConfig;
pub use corpus::{Rule, StyleCorpus};
pub use property_map::PropertyMap;
pub use result::{
    AnalysisMetrics, AnalysisResult, BemAnalysis, BemClassification, BemComponent,
    BemRelationship, BemRelationshipKind, CoOccurrenceMatrix, DuplicationGroup,
    NumericDistribution, OperationTiming, PairStatistic, PatternAnalysis, PerformanceReport,
    Suggestion, SuggestionKind,
};
