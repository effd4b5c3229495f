//! The BEM Analyzer: parses each rule's selector into a Block/Element/
//! Modifier triple, builds a relationship graph between the resulting
//! components, and synthesizes structure/naming suggestions.

mod naming;
mod relationships;
mod suggestions;
mod tables;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::analysis::cancellation::CancellationToken;
use crate::core::{BemAnalysis, BemComponent, StyleCorpus};
use crate::observability::PerformanceTracker;

pub use naming::{parse_name, reconstruct, suggest_bem_name};

static CLASS_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.([A-Za-z][\w-]*)").unwrap());
static TOKEN_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"var\(--([A-Za-z][\w-]*)\)").unwrap());

/// Every `.name` class reference and `var(--name)` design-token reference
/// found in a rule's declared values.
fn extract_dependencies(properties: impl Iterator<Item = (String, String)>) -> BTreeSet<String> {
    let mut dependencies = BTreeSet::new();
    for (_, value) in properties {
        for capture in CLASS_REFERENCE.captures_iter(&value) {
            dependencies.insert(capture[1].to_string());
        }
        for capture in TOKEN_REFERENCE.captures_iter(&value) {
            dependencies.insert(capture[1].to_string());
        }
    }
    dependencies
}

/// Polls `cancellation` between components; on observed cancellation,
/// returns whatever prefix of components was already classified.
fn classify_components(corpus: &StyleCorpus, cancellation: &CancellationToken) -> Vec<BemComponent> {
    let mut components = Vec::with_capacity(corpus.len());
    for rule in corpus.iter() {
        if cancellation.is_cancelled() {
            break;
        }
        let parsed = parse_name(&rule.selector);
        let dependencies = extract_dependencies(
            rule.properties
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        components.push(BemComponent {
            name: rule.selector.clone(),
            block: parsed.block,
            element: parsed.element,
            modifier: parsed.modifier,
            classification: parsed.classification,
            styles: rule.properties.clone(),
            dependencies,
        });
    }
    components
}

/// Runs the BEM analyzer and also returns the non-fatal warnings it
/// collected, for callers (the engine) that need to merge them into
/// `AnalysisResult::warnings`.
pub fn analyze_bem_with_warnings(
    corpus: &StyleCorpus,
    style_similarity_extension: f64,
    cancellation: &CancellationToken,
    tracker: &PerformanceTracker,
) -> (BemAnalysis, Vec<crate::errors::EngineWarning>) {
    let _span = tracker.span("bem.analyze_bem");

    let components = classify_components(corpus, cancellation);
    let (relationships, warnings) =
        relationships::build_relationships(&components, style_similarity_extension);
    let component_suggestions = suggestions::bem_suggestions(&components, &relationships);

    (
        BemAnalysis {
            components,
            relationships,
            suggestions: component_suggestions,
        },
        warnings,
    )
}

/// Runs the BEM analyzer over a corpus, independent of mining/clustering.
pub fn analyze_bem(corpus: &StyleCorpus, style_similarity_extension: f64, tracker: &PerformanceTracker) -> BemAnalysis {
    analyze_bem_with_warnings(corpus, style_similarity_extension, &CancellationToken::new(), tracker).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PropertyMap, Rule};

    fn corpus(rules: &[(&str, &[(&str, &str)])]) -> StyleCorpus {
        rules
            .iter()
            .map(|(selector, props)| {
                let mut map = PropertyMap::new();
                for (k, v) in *props {
                    map.insert(*k, *v);
                }
                Rule::with_properties(*selector, map)
            })
            .collect()
    }

    #[test]
    fn classifies_and_links_a_small_bem_tree() {
        let corpus = corpus(&[
            ("card", &[("padding", "1rem")]),
            ("card__header", &[("font-weight", "bold")]),
            ("card__header--compact", &[("padding", "0.25rem")]),
        ]);
        let bem = analyze_bem(&corpus, 0.7, &Default::default());
        assert_eq!(bem.components.len(), 3);
        assert!(bem.relationships["card"]
            .iter()
            .any(|r| r.target == "card__header"));
        assert!(bem.relationships["card__header"]
            .iter()
            .any(|r| r.target == "card__header--compact"));
    }

    #[test]
    fn extracts_class_and_token_dependencies() {
        let corpus = corpus(&[(
            "card__header",
            &[
                ("color", "var(--text-primary)"),
                ("border", "1px solid .divider"),
            ],
        )]);
        let bem = analyze_bem(&corpus, 0.7, &Default::default());
        let deps = &bem.components[0].dependencies;
        assert!(deps.contains("text-primary"));
        assert!(deps.contains("divider"));
    }
}
