//! Layered `AnalysisConfig` loading: built-in defaults →
//! optional `styleloom.toml` project file → CLI flag overrides. Named
//! threshold presets (`strict`/`balanced`/`lenient`) apply a coordinated
//! set of threshold adjustments in one step.

mod preset;

pub use preset::ThresholdPreset;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::AnalysisConfig;

/// The subset of `AnalysisConfig` fields a project file or CLI invocation
/// may override; every field is optional so a partial `styleloom.toml` only
/// overrides what it mentions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub preset: Option<ThresholdPreset>,
    pub min_support: Option<usize>,
    pub min_cohesion: Option<f64>,
    pub max_cluster_depth: Option<usize>,
    pub max_itemset_size: Option<usize>,
    pub pair_correlation_threshold: Option<f64>,
    pub utility_confidence_threshold: Option<f64>,
    pub variable_frequency_threshold: Option<usize>,
    pub style_similarity_extension: Option<f64>,
    pub significance_alpha: Option<f64>,
}

impl ConfigOverrides {
    fn apply(&self, base: AnalysisConfig) -> AnalysisConfig {
        let base = match self.preset {
            Some(preset) => preset.apply(base),
            None => base,
        };

        AnalysisConfig {
            min_support: self.min_support.unwrap_or(base.min_support),
            min_cohesion: self.min_cohesion.unwrap_or(base.min_cohesion),
            max_cluster_depth: self.max_cluster_depth.unwrap_or(base.max_cluster_depth),
            max_itemset_size: self.max_itemset_size.unwrap_or(base.max_itemset_size),
            pair_correlation_threshold: self
                .pair_correlation_threshold
                .unwrap_or(base.pair_correlation_threshold),
            utility_confidence_threshold: self
                .utility_confidence_threshold
                .unwrap_or(base.utility_confidence_threshold),
            variable_frequency_threshold: self
                .variable_frequency_threshold
                .unwrap_or(base.variable_frequency_threshold),
            style_similarity_extension: self
                .style_similarity_extension
                .unwrap_or(base.style_similarity_extension),
            significance_alpha: self.significance_alpha.unwrap_or(base.significance_alpha),
        }
    }
}

/// Loads `AnalysisConfig` by layering defaults, an optional project file,
/// and CLI overrides, in that order.
pub fn load(project_file: Option<&Path>, cli_overrides: &ConfigOverrides) -> anyhow::Result<AnalysisConfig> {
    let mut config = AnalysisConfig::default();

    if let Some(path) = project_file {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let project_overrides: ConfigOverrides = toml::from_str(&contents)?;
            config = project_overrides.apply(config);
        }
    }

    config = cli_overrides.apply(config);
    Ok(config)
}
