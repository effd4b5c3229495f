use std::collections::BTreeSet;

use crate::core::{AnalysisConfig, CoOccurrenceMatrix, Cluster, FrequentSet, Rule};
use crate::errors::EngineWarning;
use crate::observability::PerformanceTracker;

/// freq-based Jaccard: `co(a, b) / max(freq(a), freq(b))`, used consistently
/// by both the cluster builder's relatedness test and the statistical
/// analyzer's pairwise correlation.
pub fn jaccard(a: &str, b: &str, matrix: &CoOccurrenceMatrix) -> f64 {
    let denom = matrix.freq(a).max(matrix.freq(b));
    if denom == 0 {
        0.0
    } else {
        matrix.co(a, b) as f64 / denom as f64
    }
}

/// Mean over all pairs `(a, b)` in `properties` of
/// `co(a, b) / max(co_total(a), co_total(b))`. The ordered and
/// unordered-pair averages coincide here since both numerator and
/// denominator are symmetric in `(a, b)`.
fn cohesion(properties: &BTreeSet<String>, matrix: &CoOccurrenceMatrix) -> f64 {
    let members: Vec<&String> = properties.iter().collect();
    if members.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            let a = members[i];
            let b = members[j];
            let denom = matrix.co_total(a).max(matrix.co_total(b));
            let ratio = if denom == 0 {
                0.0
            } else {
                matrix.co(a, b) as f64 / denom as f64
            };
            total += ratio;
            pairs += 1;
        }
    }

    if pairs == 0 {
        0.0
    } else {
        total / pairs as f64
    }
}

fn matching_rules<'a>(rules: &[&'a Rule], properties: &BTreeSet<String>) -> Vec<&'a Rule> {
    rules
        .iter()
        .filter(|rule| properties.iter().all(|p| rule.properties.contains_key(p)))
        .copied()
        .collect()
}

fn collect_values(matching: &[&Rule], properties: &BTreeSet<String>) -> Vec<String> {
    let mut values = Vec::new();
    for rule in matching {
        for property in properties {
            if let Some(value) = rule.properties.get(property) {
                values.push(value.to_string());
            }
        }
    }
    values
}

fn residual_properties(matching: &[&Rule], properties: &BTreeSet<String>) -> BTreeSet<String> {
    let mut residual = BTreeSet::new();
    for rule in matching {
        for property in rule.properties.keys() {
            residual.insert(property.to_string());
        }
    }
    for property in properties {
        residual.remove(property);
    }
    residual
}

struct Builder<'a> {
    matrix: &'a CoOccurrenceMatrix,
    config: &'a AnalysisConfig,
    claimed: BTreeSet<String>,
    next_id: u64,
    warnings: Vec<EngineWarning>,
}

impl<'a> Builder<'a> {
    /// Attempts to materialize a cluster rooted at `properties` over
    /// `candidate_rules`. Returns `None` (and leaves `properties`
    /// unclaimed) if support or cohesion falls short.
    fn try_materialize(
        &mut self,
        properties: &BTreeSet<String>,
        candidate_rules: &[&Rule],
        depth: usize,
    ) -> Option<Cluster> {
        if properties.len() < 2 {
            return None;
        }

        let matches = matching_rules(candidate_rules, properties);
        if matches.len() < self.config.min_support {
            return None;
        }

        let cohesion_score = cohesion(properties, self.matrix);
        if cohesion_score.is_nan() {
            self.warnings.push(EngineWarning::NanStatistic {
                context: format!("cohesion({:?})", properties),
            });
            return None;
        }
        if cohesion_score < self.config.min_cohesion {
            return None;
        }

        let values = collect_values(&matches, properties);
        for property in properties {
            self.claimed.insert(property.clone());
        }

        let id = self.next_id;
        self.next_id += 1;

        let children = if depth < self.config.max_cluster_depth {
            self.build_children(&matches, properties, depth + 1)
        } else {
            Vec::new()
        };

        Some(Cluster {
            id,
            properties: properties.clone(),
            values,
            children,
            cohesion: cohesion_score,
            support: matches.len(),
        })
    }

    /// Grows related-property groups from the residual of `matching` not
    /// already claimed by `parent_properties` or any other cluster in the
    /// forest, then recurses into each.
    fn build_children(
        &mut self,
        matching: &[&Rule],
        parent_properties: &BTreeSet<String>,
        depth: usize,
    ) -> Vec<Cluster> {
        let residual = residual_properties(matching, parent_properties);
        let available: Vec<String> = residual
            .into_iter()
            .filter(|p| !self.claimed.contains(p))
            .collect();

        let mut sub_claimed: BTreeSet<String> = BTreeSet::new();
        let mut children = Vec::new();

        for property in &available {
            if sub_claimed.contains(property) {
                continue;
            }

            let mut related: BTreeSet<String> = BTreeSet::from([property.clone()]);
            for other in &available {
                if other != property
                    && !sub_claimed.contains(other)
                    && jaccard(property, other, self.matrix) >= self.config.min_cohesion
                {
                    related.insert(other.clone());
                }
            }

            if related.len() < 2 {
                continue;
            }

            if let Some(child) = self.try_materialize(&related, matching, depth) {
                sub_claimed.extend(child.properties.iter().cloned());
                children.push(child);
            }
        }

        children
    }
}

/// Produces the forest of clusters from the mined frequent sets.
/// `frequent_sets` must already be in the miner's canonical order
/// (descending cardinality, then support, then lexicographic) for cluster
/// assembly to be deterministic.
pub fn build_clusters(
    rules: &[&Rule],
    frequent_sets: &[FrequentSet],
    matrix: &CoOccurrenceMatrix,
    config: &AnalysisConfig,
    tracker: &PerformanceTracker,
) -> (Vec<Cluster>, Vec<EngineWarning>) {
    let _span = tracker.span("clusters.build_clusters");

    let mut builder = Builder {
        matrix,
        config,
        claimed: BTreeSet::new(),
        next_id: 0,
        warnings: Vec::new(),
    };

    let mut top_level = Vec::new();

    for frequent_set in frequent_sets {
        if frequent_set.properties.len() < 2 {
            continue;
        }
        if frequent_set
            .properties
            .iter()
            .all(|p| builder.claimed.contains(p))
        {
            continue;
        }

        if let Some(cluster) = builder.try_materialize(&frequent_set.properties, rules, 1) {
            top_level.push(cluster);
        }
    }

    (top_level, builder.warnings)
}
