use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Thresholds governing every stage of the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub min_support: usize,
    pub min_cohesion: f64,
    pub max_cluster_depth: usize,
    pub max_itemset_size: usize,
    pub pair_correlation_threshold: f64,
    pub utility_confidence_threshold: f64,
    pub variable_frequency_threshold: usize,
    pub style_similarity_extension: f64,
    pub significance_alpha: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_support: 2,
            min_cohesion: 0.5,
            max_cluster_depth: 3,
            max_itemset_size: 5,
            pair_correlation_threshold: 0.5,
            utility_confidence_threshold: 0.8,
            variable_frequency_threshold: 3,
            style_similarity_extension: 0.7,
            significance_alpha: 0.05,
        }
    }
}

impl AnalysisConfig {
    /// Validates every `[0, 1]`-bounded ratio and rejects a zero
    /// `min_support`/`max_itemset_size`; since this type's integer fields
    /// are unsigned, the boundary-violating case is instead "too small to
    /// ever retain anything".
    ///
    /// Accumulates every violation rather than stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("min_cohesion", self.min_cohesion),
            ("pair_correlation_threshold", self.pair_correlation_threshold),
            (
                "utility_confidence_threshold",
                self.utility_confidence_threshold,
            ),
            ("style_similarity_extension", self.style_similarity_extension),
            ("significance_alpha", self.significance_alpha),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                errors.push(ConfigError::ThresholdOutOfRange {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if self.min_support == 0 {
            errors.push(ConfigError::NonPositiveInteger {
                name: "min_support".to_string(),
                value: 0,
            });
        }
        if self.max_itemset_size == 0 {
            errors.push(ConfigError::NonPositiveInteger {
                name: "max_itemset_size".to_string(),
                value: 0,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
