//! Error and warning taxonomy for the engine.
//!
//! `ConfigError` is fatal to the call that produced it. `EngineWarning`
//! covers `InvariantViolation`: a computed statistic is `NaN`, a cluster
//! lacks two or more properties, a cycle appears where the BEM relationship
//! graph is supposed to be a forest. Warnings never abort an analysis — the
//! offending substructure is simply omitted and the warning is attached to
//! `AnalysisResult::warnings` for the caller to inspect or log.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configuration value outside its valid domain. Fatal: surfaced to the
/// caller of `analyze`/`bem_analyze` before any pipeline stage runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { name: String, value: f64 },

    #[error("{name} must be a positive integer, got {value}")]
    NonPositiveInteger { name: String, value: i64 },
}

/// A non-fatal defect discovered while computing one sub-analysis. The
/// offending substructure is dropped; every other sub-analysis continues —
/// this never terminates the analysis. Derives `Serialize`/`Deserialize`
/// so it can travel inside `AnalysisResult::warnings` through `io::json`.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum EngineWarning {
    #[error("statistic for {context} was NaN and was omitted")]
    NanStatistic { context: String },

    #[error("cluster candidate {properties:?} had fewer than two properties and was discarded")]
    DegenerateCluster { properties: Vec<String> },

    #[error("BEM relationship graph contained a cycle among {components:?}; offending edges were dropped")]
    RelationshipCycle { components: Vec<String> },
}
