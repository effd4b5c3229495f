use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::AnalysisConfig;

/// Named threshold bundles: `strict` surfaces only the most confident
/// patterns, `lenient` surfaces more speculative ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ThresholdPreset {
    Strict,
    Balanced,
    Lenient,
}

impl ThresholdPreset {
    /// Applies this preset on top of `base`, overriding the thresholds it
    /// governs. A preset is applied before any more specific
    /// `ConfigOverrides` field, so an explicit field still wins.
    pub fn apply(self, base: AnalysisConfig) -> AnalysisConfig {
        match self {
            ThresholdPreset::Strict => AnalysisConfig {
                min_cohesion: 0.75,
                utility_confidence_threshold: 0.9,
                pair_correlation_threshold: 0.7,
                style_similarity_extension: 0.85,
                significance_alpha: 0.01,
                ..base
            },
            ThresholdPreset::Balanced => AnalysisConfig::default(),
            ThresholdPreset::Lenient => AnalysisConfig {
                min_cohesion: 0.3,
                utility_confidence_threshold: 0.6,
                pair_correlation_threshold: 0.3,
                style_similarity_extension: 0.5,
                significance_alpha: 0.1,
                ..base
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_preset_raises_cohesion_threshold() {
        let config = ThresholdPreset::Strict.apply(AnalysisConfig::default());
        assert!(config.min_cohesion > AnalysisConfig::default().min_cohesion);
    }

    #[test]
    fn balanced_preset_matches_defaults() {
        let config = ThresholdPreset::Balanced.apply(AnalysisConfig::default());
        assert_eq!(config, AnalysisConfig::default());
    }
}
