use std::collections::{BTreeMap, BTreeSet};

use crate::core::{BemComponent, BemRelationship, BemRelationshipKind};
use crate::errors::EngineWarning;

use super::naming::{base_without_modifier, parent_name, parse_name};

/// Jaccard similarity of two components' own declared property-name sets,
/// distinct from the corpus-wide co-occurrence Jaccard used by the cluster
/// builder and statistical analyzer.
pub(super) fn property_set_jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

fn structural_kinds() -> BTreeSet<BemRelationshipKind> {
    BTreeSet::from([
        BemRelationshipKind::Parent,
        BemRelationshipKind::Modifier,
        BemRelationshipKind::ElementModifier,
    ])
}

/// Depth-first cycle check restricted to the structural (Parent/Modifier/
/// ElementModifier) edge subset, which must form a forest. Mirrors the
/// plain-adjacency-map DFS idiom this engine uses elsewhere instead of
/// pulling in a graph crate.
fn has_cycle(graph: &BTreeMap<String, Vec<String>>) -> Option<Vec<String>> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Visiting,
        Done,
    }

    fn visit(
        node: &str,
        graph: &BTreeMap<String, Vec<String>>,
        marks: &mut BTreeMap<String, Mark>,
        stack: &mut Vec<String>,
    ) -> Option<Vec<String>> {
        match marks.get(node) {
            Some(Mark::Done) => return None,
            Some(Mark::Visiting) => {
                let start = stack.iter().position(|n| n == node).unwrap_or(0);
                return Some(stack[start..].to_vec());
            }
            None => {}
        }
        marks.insert(node.to_string(), Mark::Visiting);
        stack.push(node.to_string());
        if let Some(targets) = graph.get(node) {
            for target in targets {
                if let Some(cycle) = visit(target, graph, marks, stack) {
                    return Some(cycle);
                }
            }
        }
        stack.pop();
        marks.insert(node.to_string(), Mark::Done);
        None
    }

    let mut marks = BTreeMap::new();
    for node in graph.keys() {
        let mut stack = Vec::new();
        if let Some(cycle) = visit(node, graph, &mut marks, &mut stack) {
            return Some(cycle);
        }
    }
    None
}

/// Builds the BEM relationship adjacency list from classified components:
/// structural edges (Parent, Modifier, ElementModifier) derived from
/// naming, plus Extension (style similarity) and Composition (dependency
/// resolution) edges.
pub fn build_relationships(
    components: &[BemComponent],
    style_similarity_extension: f64,
) -> (BTreeMap<String, Vec<BemRelationship>>, Vec<EngineWarning>) {
    let by_name: BTreeMap<&str, &BemComponent> =
        components.iter().map(|c| (c.name.as_str(), c)).collect();

    let mut relationships: BTreeMap<String, Vec<BemRelationship>> = BTreeMap::new();
    let mut structural_graph: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut warnings = Vec::new();

    let mut push = |graph: &mut BTreeMap<String, Vec<String>>, source: &str, target: &str, kind: BemRelationshipKind, confidence: f64| {
        if structural_kinds().contains(&kind) {
            graph.entry(source.to_string()).or_default().push(target.to_string());
        }
        relationships
            .entry(source.to_string())
            .or_default()
            .push(BemRelationship {
                source: source.to_string(),
                target: target.to_string(),
                kind,
                confidence,
            });
    };

    for component in components {
        let parsed = parse_name(&component.name);

        if parsed.element.is_some() {
            if let Some(parent) = parent_name(&parsed) {
                if by_name.contains_key(parent.as_str()) && parent != component.name {
                    push(
                        &mut structural_graph,
                        &parent,
                        &component.name,
                        BemRelationshipKind::Parent,
                        1.0,
                    );
                }
            }
        }

        if parsed.modifier.is_some() {
            if let Some(base_name) = base_without_modifier(&parsed) {
                if by_name.contains_key(base_name.as_str()) && base_name != component.name {
                    let kind = if parsed.element.is_some() {
                        BemRelationshipKind::ElementModifier
                    } else {
                        BemRelationshipKind::Modifier
                    };
                    push(&mut structural_graph, &base_name, &component.name, kind, 1.0);
                }
            }
        }

        for dependency in &component.dependencies {
            if by_name.contains_key(dependency.as_str()) && dependency != &component.name {
                push(
                    &mut structural_graph,
                    &component.name,
                    dependency,
                    BemRelationshipKind::Composition,
                    0.8,
                );
            }
        }
    }

    for a in components {
        for b in components {
            if a.name >= b.name {
                continue;
            }
            let a_props: BTreeSet<String> = a.styles.keys().map(String::from).collect();
            let b_props: BTreeSet<String> = b.styles.keys().map(String::from).collect();
            let similarity = property_set_jaccard(&a_props, &b_props);
            if similarity >= style_similarity_extension {
                relationships.entry(a.name.clone()).or_default().push(BemRelationship {
                    source: a.name.clone(),
                    target: b.name.clone(),
                    kind: BemRelationshipKind::Extension,
                    confidence: similarity,
                });
            }
        }
    }

    if let Some(cycle) = has_cycle(&structural_graph) {
        warnings.push(EngineWarning::RelationshipCycle { components: cycle.clone() });
        for node in &cycle {
            relationships.remove(node);
        }
    }

    (relationships, warnings)
}
