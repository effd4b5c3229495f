//! Cross-cutting properties that aren't tied to one specific end-to-end
//! scenario: boundary behavior, determinism, and the BEM naming round-trip.

use styleloom::analysis::bem::{parse_name, reconstruct};
use styleloom::analysis::{analyze, CancellationToken};
use styleloom::core::{AnalysisConfig, PropertyMap, Rule, StyleCorpus};

fn rule(selector: &str, props: &[(&str, &str)]) -> Rule {
    let mut map = PropertyMap::new();
    for (k, v) in props {
        map.insert(*k, *v);
    }
    Rule::with_properties(selector, map)
}

#[test]
fn empty_corpus_yields_empty_result() {
    let corpus = StyleCorpus::new(Vec::new());
    let result = analyze(&corpus, &AnalysisConfig::default(), &CancellationToken::new()).unwrap();
    assert!(result.clusters.is_empty());
    assert!(result.suggestions.is_empty());
    assert_eq!(result.metrics.total_rules, 0);
    assert!(result.warnings.is_empty());
}

#[test]
fn single_rule_yields_no_clusters_and_zero_entropy() {
    let corpus = StyleCorpus::new(vec![rule("a", &[("color", "red")])]);
    let result = analyze(&corpus, &AnalysisConfig::default(), &CancellationToken::new()).unwrap();
    assert!(result.clusters.is_empty());
    assert_eq!(result.patterns.value_entropy.get("color"), Some(&0.0));
}

#[test]
fn identical_rules_form_one_fully_cohesive_cluster() {
    let props = [("display", "flex"), ("gap", "1rem")];
    let corpus = StyleCorpus::new(vec![
        rule("a", &props),
        rule("b", &props),
        rule("c", &props),
    ]);
    let result = analyze(&corpus, &AnalysisConfig::default(), &CancellationToken::new()).unwrap();
    assert_eq!(result.clusters.len(), 1);
    assert!((result.clusters[0].cohesion - 1.0).abs() < 1e-9);
}

#[test]
fn analyze_is_deterministic_across_runs() {
    let corpus = StyleCorpus::new(vec![
        rule("card", &[("padding", "1rem"), ("margin", "1rem")]),
        rule("card__header", &[("font-weight", "bold")]),
        rule("panel", &[("padding", "1rem"), ("margin", "1rem")]),
    ]);
    let config = AnalysisConfig::default();

    let first = analyze(&corpus, &config, &CancellationToken::new()).unwrap();
    let second = analyze(&corpus, &config, &CancellationToken::new()).unwrap();

    assert_eq!(first.clusters, second.clusters);
    assert_eq!(first.suggestions, second.suggestions);
    assert_eq!(first.bem.components, second.bem.components);
    assert_eq!(first.bem.relationships, second.bem.relationships);
    assert_eq!(first.patterns, second.patterns);
}

#[test]
fn suggestion_ranking_is_a_total_order_by_confidence_then_kind() {
    let corpus = StyleCorpus::new(vec![
        rule("a", &[("padding", "1rem"), ("margin", "1rem"), ("border-radius", "4px")]),
        rule("b", &[("padding", "1rem"), ("margin", "1rem"), ("border-radius", "4px")]),
        rule("c", &[("padding", "1rem"), ("margin", "1rem"), ("border-radius", "4px")]),
        rule("weirdName_one", &[("color", "red")]),
    ]);
    let result = analyze(&corpus, &AnalysisConfig::default(), &CancellationToken::new()).unwrap();

    for window in result.suggestions.windows(2) {
        let (a, b) = (&window[0], &window[1]);
        assert!(
            a.confidence > b.confidence
                || (a.confidence == b.confidence && a.kind <= b.kind),
            "ranking violated between {a:?} and {b:?}"
        );
    }
}

#[test]
fn single_property_rule_yields_no_clusters_even_with_min_support_one() {
    let corpus = StyleCorpus::new(vec![rule("a", &[("padding", "1rem")])]);
    let config = AnalysisConfig {
        min_support: 1,
        ..AnalysisConfig::default()
    };
    let result = analyze(&corpus, &config, &CancellationToken::new()).unwrap();
    // The only frequent set mined is the single property itself; clusters
    // require at least two properties, so none can form regardless of
    // how low min_support is set.
    assert!(result.clusters.is_empty());
}

#[test]
fn bem_name_parsing_round_trips_through_reconstruct() {
    for name in [
        "button",
        "button--primary",
        "form__group",
        "form__group--horizontal",
        "form__group__label",
        "nav__item--active",
    ] {
        let parsed = parse_name(name);
        let rebuilt = reconstruct(
            parsed.block.as_deref().expect("should parse"),
            parsed.element.as_deref(),
            parsed.modifier.as_deref(),
        );
        assert_eq!(rebuilt, name);
        assert_eq!(parse_name(&rebuilt), parsed);
    }
}

#[test]
fn invalid_config_is_rejected_with_every_violation_reported() {
    let corpus = StyleCorpus::new(vec![rule("a", &[("color", "red")])]);
    let config = AnalysisConfig {
        min_cohesion: -1.0,
        pair_correlation_threshold: 2.0,
        min_support: 0,
        ..AnalysisConfig::default()
    };
    let errors = analyze(&corpus, &config, &CancellationToken::new()).unwrap_err();
    assert_eq!(errors.len(), 3);
}
