use std::collections::BTreeSet;

use crate::analysis::bem::analyze_bem_with_warnings;
use crate::analysis::cancellation::CancellationToken;
use crate::analysis::clusters::build_clusters;
use crate::analysis::cooccurrence::build_cooccurrence;
use crate::analysis::metrics::aggregate_metrics;
use crate::analysis::miner::mine_frequent_sets;
use crate::analysis::rule_extractor::extract_rules;
use crate::analysis::statistics::analyze_statistics;
use crate::analysis::suggestions::synthesize_suggestions;
use crate::core::{AnalysisConfig, AnalysisResult, Rule, StyleCorpus};
use crate::errors::ConfigError;
use crate::observability::PerformanceTracker;

/// Runs the full pipeline over `corpus`: extraction, co-occurrence,
/// frequent-set mining, clustering, statistics, BEM analysis, suggestion
/// synthesis, and metrics.
///
/// Mining and BEM analysis run concurrently via `rayon::join`, since both
/// are independent pure functions over the same immutable corpus;
/// everything downstream of both (clustering, statistics, suggestion
/// synthesis) only begins once both have returned, so the merge is
/// deterministic under any interleaving.
pub fn analyze(
    corpus: &StyleCorpus,
    config: &AnalysisConfig,
    cancellation: &CancellationToken,
) -> Result<AnalysisResult, Vec<ConfigError>> {
    config.validate()?;

    let tracker = PerformanceTracker::new();
    let _span = tracker.span("engine.analyze");

    if corpus.is_empty() {
        return Ok(AnalysisResult {
            performance: tracker.report(),
            ..AnalysisResult::default()
        });
    }

    let rules: Vec<&Rule> = extract_rules(corpus);
    let matrix = build_cooccurrence(&rules);
    let rule_property_sets: Vec<BTreeSet<String>> = rules
        .iter()
        .map(|r| r.properties.keys().map(String::from).collect())
        .collect();

    let (frequent_sets, (bem, bem_warnings)) = rayon::join(
        || mine_frequent_sets(&rule_property_sets, config, cancellation, &tracker),
        || analyze_bem_with_warnings(corpus, config.style_similarity_extension, cancellation, &tracker),
    );

    let (clusters, cluster_warnings) =
        build_clusters(&rules, &frequent_sets, &matrix, config, &tracker);
    let patterns = analyze_statistics(&rules, &frequent_sets, &matrix, config, &tracker);
    let suggestions = synthesize_suggestions(&rules, &clusters, bem.suggestions.clone(), config, &matrix);
    let metrics = aggregate_metrics(&rules, &matrix, &patterns, &clusters, config, cancellation, &tracker);

    let mut warnings = cluster_warnings;
    warnings.extend(bem_warnings);

    Ok(AnalysisResult {
        patterns,
        clusters,
        bem,
        suggestions,
        metrics,
        performance: tracker.report(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PropertyMap;

    fn rule(selector: &str, props: &[(&str, &str)]) -> Rule {
        let mut map = PropertyMap::new();
        for (k, v) in props {
            map.insert(*k, *v);
        }
        Rule::with_properties(selector, map)
    }

    #[test]
    fn empty_corpus_yields_empty_result_without_error() {
        let corpus = StyleCorpus::new(Vec::new());
        let result = analyze(&corpus, &AnalysisConfig::default(), &CancellationToken::new()).unwrap();
        assert!(result.clusters.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_before_any_pipeline_stage_runs() {
        let corpus = StyleCorpus::new(vec![rule("a", &[("color", "red")])]);
        let config = AnalysisConfig {
            min_cohesion: 5.0,
            ..AnalysisConfig::default()
        };
        let result = analyze(&corpus, &config, &CancellationToken::new());
        assert!(result.is_err());
    }

    #[test]
    fn box_model_corpus_produces_clusters_and_suggestions() {
        let corpus = StyleCorpus::new(vec![
            rule("a", &[("padding", "1rem"), ("margin", "1rem"), ("border-radius", "4px")]),
            rule("b", &[("padding", "1rem"), ("margin", "1rem"), ("border-radius", "4px")]),
            rule("c", &[("padding", "1rem"), ("margin", "1rem"), ("border-radius", "4px")]),
        ]);
        let config = AnalysisConfig {
            utility_confidence_threshold: 0.9,
            variable_frequency_threshold: 3,
            ..AnalysisConfig::default()
        };
        let result = analyze(&corpus, &config, &CancellationToken::new()).unwrap();
        assert_eq!(result.clusters.len(), 1);
        assert!(result.suggestions.iter().any(|s| s.kind == crate::core::SuggestionKind::Utility));
    }
}
