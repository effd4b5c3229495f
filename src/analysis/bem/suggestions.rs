use std::collections::BTreeSet;

use crate::core::{BemClassification, BemComponent, BemRelationship, BemRelationshipKind, Suggestion, SuggestionKind};

use super::naming::suggest_bem_name;
use super::relationships::property_set_jaccard;
use super::tables::{category_is_relevant, COMMON_ELEMENTS, COMMON_MODIFIERS};

/// Style-set Jaccard similarity at or above which a candidate is treated as
/// structurally related to a block, independent of the Extension-edge
/// threshold configured for the relationship graph.
const STRUCTURE_STYLE_SIMILARITY: f64 = 0.5;

fn affected(names: impl IntoIterator<Item = String>) -> BTreeSet<String> {
    names.into_iter().collect()
}

/// Naming suggestions (confidence 0.9): every component whose name failed
/// BEM classification gets a rewritten name.
fn naming_suggestions(components: &[BemComponent]) -> Vec<Suggestion> {
    components
        .iter()
        .filter(|c| c.classification == BemClassification::Unclassified)
        .map(|c| Suggestion {
            kind: SuggestionKind::Naming,
            description: format!(
                "`{}` does not follow BEM naming; consider `{}`",
                c.name,
                suggest_bem_name(&c.name)
            ),
            affected: affected([c.name.clone()]),
            confidence: 0.9,
        })
        .collect()
}

/// Common-pattern suggestions: a block missing an element or modifier its
/// common-element/common-modifier table entry expects.
fn common_pattern_suggestions(components: &[BemComponent]) -> Vec<Suggestion> {
    let existing: BTreeSet<&str> = components.iter().map(|c| c.name.as_str()).collect();
    let mut suggestions = Vec::new();

    for component in components {
        if component.classification != BemClassification::Block {
            continue;
        }
        let block = &component.name;

        if let Some(elements) = COMMON_ELEMENTS.get(block.as_str()) {
            for element in *elements {
                let candidate = format!("{block}__{element}");
                if !existing.contains(candidate.as_str()) {
                    suggestions.push(Suggestion {
                        kind: SuggestionKind::CommonPattern,
                        description: format!(
                            "`{block}` is missing the commonly-paired element `{candidate}`"
                        ),
                        affected: affected([block.clone()]),
                        confidence: 0.7,
                    });
                }
            }
        }

        let own_properties: Vec<String> = component.styles.keys().map(String::from).collect();
        for (category, modifiers) in COMMON_MODIFIERS.iter() {
            if !category_is_relevant(category, &own_properties) {
                continue;
            }
            for modifier in *modifiers {
                let candidate = format!("{block}--{modifier}");
                if !existing.contains(candidate.as_str()) {
                    suggestions.push(Suggestion {
                        kind: SuggestionKind::CommonPattern,
                        description: format!(
                            "`{block}` is missing the commonly-paired `{category}` modifier `{candidate}`"
                        ),
                        affected: affected([block.clone()]),
                        confidence: 0.6,
                    });
                }
            }
        }
    }

    suggestions
}

/// BEM-structure suggestions (confidence 0.8): a component name that looks
/// like it belongs under a known block, even though it never parsed as one
/// of that block's elements/modifiers. Triggered by any of three signals:
/// a name prefix match, the candidate's bare name appearing in the block's
/// common-elements table entry, or style-set similarity to the block at or
/// above `STRUCTURE_STYLE_SIMILARITY`.
fn structure_suggestions(components: &[BemComponent]) -> Vec<Suggestion> {
    let blocks: Vec<&BemComponent> = components
        .iter()
        .filter(|c| c.classification == BemClassification::Block)
        .collect();

    let mut suggestions = Vec::new();
    for candidate in components {
        if candidate.classification == BemClassification::Block {
            continue;
        }
        let candidate_props: BTreeSet<String> = candidate.styles.keys().map(String::from).collect();

        for block in &blocks {
            if candidate.name == block.name || candidate.block.as_deref() == Some(&block.name) {
                continue;
            }

            let prefix_match = candidate.name.starts_with(block.name.as_str());
            let table_match = COMMON_ELEMENTS
                .get(block.name.as_str())
                .is_some_and(|elements| elements.contains(&candidate.name.as_str()));
            let block_props: BTreeSet<String> = block.styles.keys().map(String::from).collect();
            let style_match = property_set_jaccard(&candidate_props, &block_props) >= STRUCTURE_STYLE_SIMILARITY;

            if prefix_match || table_match || style_match {
                suggestions.push(Suggestion {
                    kind: SuggestionKind::BemStructure,
                    description: format!(
                        "`{}` is probably an element or modifier of `{}`",
                        candidate.name, block.name
                    ),
                    affected: affected([candidate.name.clone(), block.name.clone()]),
                    confidence: 0.8,
                });
            }
        }
    }
    suggestions
}

/// Relationship suggestions: every `Extension` relationship found by the
/// graph builder is surfaced as a suggestion at the same confidence.
fn relationship_suggestions(relationships: &std::collections::BTreeMap<String, Vec<BemRelationship>>) -> Vec<Suggestion> {
    relationships
        .values()
        .flatten()
        .filter(|r| r.kind == BemRelationshipKind::Extension)
        .map(|r| Suggestion {
            kind: SuggestionKind::Relationship,
            description: format!(
                "`{}` and `{}` share most of their declared properties; consider a shared base",
                r.source, r.target
            ),
            affected: affected([r.source.clone(), r.target.clone()]),
            confidence: r.confidence,
        })
        .collect()
}

pub fn bem_suggestions(
    components: &[BemComponent],
    relationships: &std::collections::BTreeMap<String, Vec<BemRelationship>>,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    suggestions.extend(structure_suggestions(components));
    suggestions.extend(relationship_suggestions(relationships));
    suggestions.extend(naming_suggestions(components));
    suggestions.extend(common_pattern_suggestions(components));
    suggestions
}
