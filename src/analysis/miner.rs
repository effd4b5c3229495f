use std::collections::{BTreeMap, BTreeSet};

use crate::analysis::cancellation::CancellationToken;
use crate::core::{AnalysisConfig, FrequentSet};
use crate::observability::PerformanceTracker;

/// Level-wise (Apriori-style) enumeration of property sets whose support
/// meets `config.min_support`.
///
/// The anti-monotone pruning step (requiring every size-k subset of a
/// candidate to already be frequent) is an optimization, not part of the
/// contract — it produces the same mined set either way, so this
/// implementation skips it and verifies support exactly by scanning
/// `rule_property_sets`, which is simpler to reason about at the rule-set
/// sizes this engine targets.
pub fn mine_frequent_sets(
    rule_property_sets: &[BTreeSet<String>],
    config: &AnalysisConfig,
    cancellation: &CancellationToken,
    tracker: &PerformanceTracker,
) -> Vec<FrequentSet> {
    let _span = tracker.span("miner.mine_frequent_sets");
    let mut discovered: Vec<FrequentSet> = Vec::new();

    let mut freq: BTreeMap<String, usize> = BTreeMap::new();
    for set in rule_property_sets {
        for property in set {
            *freq.entry(property.clone()).or_insert(0) += 1;
        }
    }

    let mut current_level: Vec<BTreeSet<String>> = freq
        .iter()
        .filter(|(_, &count)| count >= config.min_support)
        .map(|(property, _)| BTreeSet::from([property.clone()]))
        .collect();

    for level_set in &current_level {
        let support = support_of(level_set, rule_property_sets);
        discovered.push(FrequentSet::new(level_set.clone(), support));
    }

    let mut k = 1;
    while !current_level.is_empty() && k < config.max_itemset_size {
        let _level_span = tracker.span("miner.level");
        if cancellation.is_cancelled() {
            break;
        }

        let mut next_level: Vec<BTreeSet<String>> = Vec::new();
        let mut seen: BTreeSet<BTreeSet<String>> = BTreeSet::new();

        for i in 0..current_level.len() {
            for j in (i + 1)..current_level.len() {
                let union: BTreeSet<String> = current_level[i]
                    .union(&current_level[j])
                    .cloned()
                    .collect();
                if union.len() != k + 1 || seen.contains(&union) {
                    continue;
                }
                seen.insert(union.clone());

                let support = support_of(&union, rule_property_sets);
                if support >= config.min_support {
                    discovered.push(FrequentSet::new(union.clone(), support));
                    next_level.push(union);
                }
            }
        }

        current_level = next_level;
        k += 1;
    }

    sort_frequent_sets(&mut discovered);
    discovered
}

fn support_of(candidate: &BTreeSet<String>, rule_property_sets: &[BTreeSet<String>]) -> usize {
    rule_property_sets
        .iter()
        .filter(|rule_set| candidate.is_subset(rule_set))
        .count()
}

/// Descending by cardinality, then descending by support, ties broken by
/// lexicographic order of the sorted property names — the output ordering
/// downstream cluster assembly depends on for determinism.
fn sort_frequent_sets(sets: &mut [FrequentSet]) {
    sets.sort_by(|a, b| {
        b.properties
            .len()
            .cmp(&a.properties.len())
            .then_with(|| b.support.cmp(&a.support))
            .then_with(|| {
                let a_sorted: Vec<&String> = a.properties.iter().collect();
                let b_sorted: Vec<&String> = b.properties.iter().collect();
                a_sorted.cmp(&b_sorted)
            })
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(props: &[&str]) -> BTreeSet<String> {
        props.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mines_box_model_pattern() {
        let rule_sets = vec![
            set(&["padding", "margin", "border-radius"]),
            set(&["padding", "margin", "border-radius"]),
            set(&["padding", "margin", "border-radius"]),
        ];
        let config = AnalysisConfig::default();
        let found = mine_frequent_sets(&rule_sets, &config, &CancellationToken::new(), &Default::default());

        let full_set = found
            .iter()
            .find(|fs| fs.properties.len() == 3)
            .expect("full triple should be frequent");
        assert_eq!(full_set.support, 3);
    }

    #[test]
    fn single_rule_with_min_support_one_yields_one_full_set_no_smaller() {
        let rule_sets = vec![set(&["a", "b", "c"])];
        let config = AnalysisConfig {
            min_support: 1,
            ..AnalysisConfig::default()
        };
        let found = mine_frequent_sets(&rule_sets, &config, &CancellationToken::new(), &Default::default());

        // Apriori still enumerates every frequent subset (singletons,
        // pairs, the full triple) since they all meet support >= 1; the
        // *full* set is unique among them only at its own cardinality.
        let max_card = found.iter().map(|fs| fs.properties.len()).max().unwrap();
        assert_eq!(max_card, 3);
        let at_max: Vec<_> = found.iter().filter(|fs| fs.properties.len() == max_card).collect();
        assert_eq!(at_max.len(), 1);
        assert_eq!(at_max[0].properties, set(&["a", "b", "c"]));
    }

    #[test]
    fn respects_max_itemset_size() {
        let rule_sets = vec![set(&["a", "b", "c", "d", "e", "f"]); 3];
        let config = AnalysisConfig {
            max_itemset_size: 2,
            ..AnalysisConfig::default()
        };
        let found = mine_frequent_sets(&rule_sets, &config, &CancellationToken::new(), &Default::default());
        assert!(found.iter().all(|fs| fs.properties.len() <= 2));
    }

    #[test]
    fn ordering_is_deterministic_across_runs() {
        let rule_sets = vec![
            set(&["a", "b"]),
            set(&["a", "b", "c"]),
            set(&["a", "b", "c"]),
        ];
        let config = AnalysisConfig::default();
        let first = mine_frequent_sets(&rule_sets, &config, &CancellationToken::new(), &Default::default());
        let second = mine_frequent_sets(&rule_sets, &config, &CancellationToken::new(), &Default::default());
        assert_eq!(first, second);
    }
}
