use std::collections::BTreeMap;

use crate::analysis::cancellation::CancellationToken;
use crate::core::{AnalysisConfig, AnalysisMetrics, Cluster, CoOccurrenceMatrix, DuplicationGroup, PatternAnalysis, Rule};
use crate::observability::PerformanceTracker;

fn combinator_count(selector: &str) -> usize {
    selector.chars().filter(|c| matches!(c, ' ' | '>' | '+')).count()
}

fn specificity(selector: &str) -> f64 {
    selector
        .chars()
        .map(|c| match c {
            '#' => 100.0,
            '.' | ':' | '[' => 10.0,
            _ => 0.0,
        })
        .sum()
}

fn rule_complexity(rule: &Rule, pattern: &PatternAnalysis) -> f64 {
    let non_standard = rule
        .properties
        .keys()
        .filter(|p| {
            pattern
                .non_standard_values
                .get(*p)
                .is_some_and(|values| rule.properties.get(p).is_some_and(|v| values.contains(v)))
        })
        .count();

    rule.properties.len() as f64 + 0.5 * non_standard as f64 + 0.5 * combinator_count(&rule.selector) as f64
}

fn mean_cluster_cohesion(clusters: &[Cluster]) -> f64 {
    fn collect<'a>(clusters: &'a [Cluster], out: &mut Vec<&'a Cluster>) {
        for cluster in clusters {
            out.push(cluster);
            collect(&cluster.children, out);
        }
    }
    let mut flattened = Vec::new();
    collect(clusters, &mut flattened);
    if flattened.is_empty() {
        return 0.0;
    }
    flattened.iter().map(|c| c.cohesion).sum::<f64>() / flattened.len() as f64
}

fn duplication(rules: &[&Rule], min_support: usize) -> (Vec<DuplicationGroup>, f64) {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for rule in rules {
        for (property, value) in rule.properties.iter() {
            *counts
                .entry((property.to_string(), value.to_string()))
                .or_insert(0) += 1;
        }
    }

    let groups: Vec<DuplicationGroup> = counts
        .into_iter()
        .filter(|(_, count)| *count >= min_support)
        .map(|((property, value), occurrences)| DuplicationGroup { property, value, occurrences })
        .collect();

    let total_duplicate_occurrences: usize = groups.iter().map(|g| g.occurrences).sum();
    let ratio = if rules.is_empty() {
        0.0
    } else {
        total_duplicate_occurrences as f64 / rules.len() as f64
    };

    (groups, ratio)
}

/// Computes corpus-wide metrics. Polls `cancellation` between rules; on
/// observed cancellation, the result reflects only the rules processed so
/// far for per-rule aggregates, with cluster/duplication metrics (which are
/// not rule-at-a-time) still computed over the whole corpus.
pub fn aggregate_metrics(
    rules: &[&Rule],
    matrix: &CoOccurrenceMatrix,
    pattern: &PatternAnalysis,
    clusters: &[Cluster],
    config: &AnalysisConfig,
    cancellation: &CancellationToken,
    tracker: &PerformanceTracker,
) -> AnalysisMetrics {
    let _span = tracker.span("metrics.aggregate_metrics");

    let mut frequencies: Vec<(String, usize)> = matrix
        .properties()
        .map(|p| (p.to_string(), matrix.freq(p)))
        .collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let most_used = frequencies.iter().take(5).cloned().collect();
    let least_used = frequencies.iter().rev().take(5).cloned().collect();

    let mut complexities = Vec::with_capacity(rules.len());
    let mut specificities = Vec::with_capacity(rules.len());
    let mut rules_with_important = 0usize;
    let mut processed = 0usize;

    for rule in rules {
        if cancellation.is_cancelled() {
            break;
        }
        complexities.push(rule_complexity(rule, pattern));
        specificities.push(specificity(&rule.selector));
        if rule.properties.iter().any(|(_, v)| v.contains("!important")) {
            rules_with_important += 1;
        }
        processed += 1;
    }

    let average_rule_complexity = if processed == 0 {
        0.0
    } else {
        complexities.iter().sum::<f64>() / processed as f64
    };
    let average_specificity = if processed == 0 {
        0.0
    } else {
        specificities.iter().sum::<f64>() / processed as f64
    };
    let fraction_with_important = if processed == 0 {
        0.0
    } else {
        rules_with_important as f64 / processed as f64
    };

    let maintainability_index = ((mean_cluster_cohesion(clusters)
        + (1.0 - fraction_with_important)
        + (1.0 - average_rule_complexity / 100.0))
        / 3.0)
        * 100.0;

    let (duplication_groups, duplication_ratio) = duplication(rules, config.min_support);

    AnalysisMetrics {
        total_rules: rules.len(),
        total_properties: matrix.property_count(),
        most_used,
        least_used,
        average_rule_complexity,
        average_specificity,
        maintainability_index,
        duplication_ratio,
        duplication_groups,
    }
}
