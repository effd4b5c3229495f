use std::collections::BTreeMap;

use crate::core::{AnalysisConfig, Cluster, CoOccurrenceMatrix, Rule, Suggestion, SuggestionKind};

/// Every cluster in the forest, flattened (parents before children), for
/// rules that need to scan the whole tree rather than just the top level.
fn flatten<'a>(clusters: &'a [Cluster], out: &mut Vec<&'a Cluster>) {
    for cluster in clusters {
        out.push(cluster);
        flatten(&cluster.children, out);
    }
}

/// Utility-class suggestions: one per cluster whose cohesion and support
/// both clear their thresholds.
fn utility_suggestions(clusters: &[&Cluster], config: &AnalysisConfig) -> Vec<Suggestion> {
    clusters
        .iter()
        .filter(|c| {
            c.cohesion >= config.utility_confidence_threshold
                && c.support >= config.variable_frequency_threshold
        })
        .map(|c| Suggestion {
            kind: SuggestionKind::Utility,
            description: format!(
                "extract a utility class for the {} properties shared by {} rules",
                c.properties.len(),
                c.support
            ),
            affected: c.properties.clone(),
            confidence: c.cohesion,
        })
        .collect()
}

/// Mixin suggestions: a highly-cohesive cluster that also has at least one
/// child cluster (i.e. a nested pattern worth factoring out as a
/// parameterized mixin rather than a flat utility class).
fn mixin_suggestions(clusters: &[&Cluster]) -> Vec<Suggestion> {
    clusters
        .iter()
        .filter(|c| c.cohesion >= 0.8 && !c.children.is_empty())
        .map(|c| Suggestion {
            kind: SuggestionKind::Mixin,
            description: format!(
                "factor a mixin for the {} properties shared across this cluster's {} nested variants",
                c.properties.len(),
                c.children.len()
            ),
            affected: c.properties.clone(),
            confidence: c.cohesion,
        })
        .collect()
}

/// CssVariable suggestions: one per (property, value) pair repeated at
/// least `variable_frequency_threshold` times across the corpus,
/// confidence `min(1.0, count / 10)`.
fn variable_suggestions(rules: &[&Rule], config: &AnalysisConfig) -> Vec<Suggestion> {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for rule in rules {
        for (property, value) in rule.properties.iter() {
            *counts
                .entry((property.to_string(), value.to_string()))
                .or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count >= config.variable_frequency_threshold)
        .map(|((property, value), count)| Suggestion {
            kind: SuggestionKind::Variable,
            description: format!(
                "`{property}: {value}` repeats {count} times; extract a design token"
            ),
            affected: std::collections::BTreeSet::from([property]),
            confidence: (count as f64 / 10.0).min(1.0),
        })
        .collect()
}

/// SharedStyles suggestions: a BEM block with at least three members
/// (block itself plus its elements/modifiers) sharing at least one
/// (property, value) pair in common.
fn shared_styles_suggestions(rules: &[&Rule]) -> Vec<Suggestion> {
    use crate::analysis::bem::parse_name;

    let mut by_block: BTreeMap<String, Vec<&Rule>> = BTreeMap::new();
    for rule in rules {
        if let Some(block) = parse_name(&rule.selector).block {
            by_block.entry(block).or_default().push(rule);
        }
    }

    let mut suggestions = Vec::new();
    for (block, members) in by_block {
        if members.len() < 3 {
            continue;
        }

        let mut shared: Option<std::collections::BTreeSet<(String, String)>> = None;
        for member in &members {
            let pairs: std::collections::BTreeSet<(String, String)> = member
                .properties
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            shared = Some(match shared {
                None => pairs,
                Some(acc) => acc.intersection(&pairs).cloned().collect(),
            });
        }

        if shared.as_ref().is_some_and(|s| !s.is_empty()) {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Shared,
                description: format!(
                    "`{block}` and its {} members share declared properties; extract a shared base style",
                    members.len() - 1
                ),
                affected: std::collections::BTreeSet::from([block.clone()]),
                confidence: 0.75,
            });
        }
    }
    suggestions
}

/// Merges suggestions from the cluster builder, statistics, and BEM
/// analyzer into the final ranked list: descending by confidence, ties
/// broken by `SuggestionKind`'s declaration order.
pub fn synthesize_suggestions(
    rules: &[&Rule],
    clusters: &[Cluster],
    bem_suggestions: Vec<Suggestion>,
    config: &AnalysisConfig,
    _matrix: &CoOccurrenceMatrix,
) -> Vec<Suggestion> {
    let mut flattened = Vec::new();
    flatten(clusters, &mut flattened);

    let mut suggestions = Vec::new();
    suggestions.extend(utility_suggestions(&flattened, config));
    suggestions.extend(variable_suggestions(rules, config));
    suggestions.extend(mixin_suggestions(&flattened));
    suggestions.extend(shared_styles_suggestions(rules));
    suggestions.extend(bem_suggestions);

    suggestions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.kind.cmp(&b.kind))
    });

    suggestions
}
