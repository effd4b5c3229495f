use serde::{Deserialize, Serialize};

use crate::core::{PropertyMap, Rule, StyleCorpus};

use super::raw_value::RawValue;

/// A design-token entry: a bare scalar, or `{value, themeOverrides}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenEntry {
    pub value: String,
    pub theme_overrides: Vec<(String, String)>,
}

impl TokenEntry {
    /// Lowers a token's `RawValue` (bare scalar or `{value, themeOverrides}`
    /// mapping) into a `TokenEntry`, skipping anything that fits neither
    /// shape.
    fn from_raw(raw: &RawValue) -> Option<Self> {
        if let Some(scalar) = raw.as_scalar() {
            return Some(TokenEntry {
                value: scalar.to_string(),
                theme_overrides: Vec::new(),
            });
        }
        let mapping = raw.as_mapping()?;
        let value = mapping
            .iter()
            .find(|(k, _)| k == "value")
            .and_then(|(_, v)| v.as_scalar())?
            .to_string();
        let theme_overrides = mapping
            .iter()
            .find(|(k, _)| k == "themeOverrides")
            .and_then(|(_, v)| v.as_mapping())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(k, v)| v.as_scalar().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        Some(TokenEntry { value, theme_overrides })
    }
}

/// A sequence of single-entry `property: value` mappings, plus optional
/// `media` and nested `states`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleBlock {
    pub class: Option<String>,
    pub styles: PropertyMap,
    pub media: Option<String>,
    pub states: Vec<(String, PropertyMap)>,
}

impl StyleBlock {
    /// Lowers a `RawValue` shaped as `{class, styles, media, states}` — any
    /// field may be absent, and a non-scalar style value is skipped rather
    /// than erroring.
    fn from_raw(raw: &RawValue) -> Self {
        let class = raw.get("class").and_then(RawValue::as_scalar).map(String::from);
        let media = raw.get("media").and_then(RawValue::as_scalar).map(String::from);

        let mut styles = PropertyMap::new();
        if let Some(sequence) = raw.get("styles").and_then(RawValue::as_sequence) {
            for entry in sequence {
                if let Some(mapping) = entry.as_mapping() {
                    for (property, value) in mapping {
                        if let Some(scalar) = value.as_scalar() {
                            styles.insert(property, scalar);
                        }
                    }
                }
            }
        }

        let mut states = Vec::new();
        if let Some(mapping) = raw.get("states").and_then(RawValue::as_mapping) {
            for (state_name, state_raw) in mapping {
                let mut state_styles = PropertyMap::new();
                if let Some(sequence) = state_raw.get("styles").and_then(RawValue::as_sequence) {
                    for entry in sequence {
                        if let Some(mapping) = entry.as_mapping() {
                            for (property, value) in mapping {
                                if let Some(scalar) = value.as_scalar() {
                                    state_styles.insert(property, scalar);
                                }
                            }
                        }
                    }
                }
                states.push((state_name.clone(), state_styles));
            }
        }

        StyleBlock { class, styles, media, states }
    }
}

/// A named component: an optional base style block, a set of named parts
/// (lowered to `block__part`), and a set of named variants (lowered to
/// `block--variant`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub base: Option<StyleBlock>,
    pub parts: Vec<(String, StyleBlock)>,
    pub variants: Vec<(String, StyleBlock)>,
}

impl ComponentSpec {
    fn from_raw(raw: &RawValue) -> Self {
        let base = raw.get("base").map(StyleBlock::from_raw);
        let parts = raw
            .get("parts")
            .and_then(RawValue::as_mapping)
            .map(|entries| entries.iter().map(|(k, v)| (k.clone(), StyleBlock::from_raw(v))).collect())
            .unwrap_or_default();
        let variants = raw
            .get("variants")
            .and_then(RawValue::as_mapping)
            .map(|entries| entries.iter().map(|(k, v)| (k.clone(), StyleBlock::from_raw(v))).collect())
            .unwrap_or_default();
        ComponentSpec { base, parts, variants }
    }
}

/// The top-level external corpus schema, before lowering into a
/// `StyleCorpus`. `styleloom::analysis` never parses or sees this type —
/// only `lower()`'s output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    pub version: Option<String>,
    pub tokens: Vec<(String, TokenEntry)>,
    pub components: Vec<(String, ComponentSpec)>,
    /// Arbitrary additional top-level mappings, treated as free-form
    /// "street" styles: selector -> single-entry property:value mapping.
    pub street: Vec<(String, PropertyMap)>,
}

const RESERVED_KEYS: [&str; 3] = ["version", "tokens", "components"];

impl DesignDocument {
    /// Parses the raw top-level mapping into a `DesignDocument`.
    /// Unrecognized shapes are skipped, never errored.
    pub fn from_raw(raw: &RawValue) -> Self {
        let mut document = DesignDocument::default();
        let Some(top_level) = raw.as_mapping() else {
            return document;
        };

        for (key, value) in top_level {
            match key.as_str() {
                "version" => document.version = value.as_scalar().map(String::from),
                "tokens" => {
                    if let Some(entries) = value.as_mapping() {
                        document.tokens = entries
                            .iter()
                            .filter_map(|(name, raw)| TokenEntry::from_raw(raw).map(|t| (name.clone(), t)))
                            .collect();
                    }
                }
                "components" => {
                    if let Some(entries) = value.as_mapping() {
                        document.components = entries
                            .iter()
                            .map(|(name, raw)| (name.clone(), ComponentSpec::from_raw(raw)))
                            .collect();
                    }
                }
                _ if !RESERVED_KEYS.contains(&key.as_str()) => {
                    if let Some(mapping) = value.as_mapping() {
                        let mut properties = PropertyMap::new();
                        for (property, property_value) in mapping {
                            if let Some(scalar) = property_value.as_scalar() {
                                properties.insert(property, scalar);
                            }
                        }
                        document.street.push((key.clone(), properties));
                    }
                }
                _ => {}
            }
        }

        document
    }
}

fn push_state_rules(rules: &mut Vec<Rule>, base_selector: &str, states: &[(String, PropertyMap)]) {
    for (state, styles) in states {
        if styles.is_empty() {
            continue;
        }
        rules.push(Rule::with_properties(format!("{base_selector}:{state}"), styles.clone()));
    }
}

/// Flattens a `DesignDocument` into the core's `StyleCorpus`: the sole
/// bridge between the external schema and `styleloom::analysis`.
/// Components' base/parts/variants/states all
/// become individual `Rule`s; street styles become one `Rule` per
/// top-level key.
pub fn lower(document: &DesignDocument) -> StyleCorpus {
    let mut rules = Vec::new();

    for (name, component) in &document.components {
        if let Some(base) = &component.base {
            if !base.styles.is_empty() {
                rules.push(Rule::with_properties(name.clone(), base.styles.clone()));
            }
            push_state_rules(&mut rules, name, &base.states);
        }

        for (part_name, part) in &component.parts {
            let selector = format!("{name}__{part_name}");
            if !part.styles.is_empty() {
                rules.push(Rule::with_properties(selector.clone(), part.styles.clone()));
            }
            push_state_rules(&mut rules, &selector, &part.states);
        }

        for (variant_name, variant) in &component.variants {
            let selector = format!("{name}--{variant_name}");
            if !variant.styles.is_empty() {
                rules.push(Rule::with_properties(selector.clone(), variant.styles.clone()));
            }
            push_state_rules(&mut rules, &selector, &variant.states);
        }
    }

    for (selector, properties) in &document.street {
        if !properties.is_empty() {
            rules.push(Rule::with_properties(selector.clone(), properties.clone()));
        }
    }

    StyleCorpus::new(rules)
}
