use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::BemClassification;

/// `letter (letter|digit)* (-(letter|digit)+)*` — a single kebab-case
/// token, never containing an underscore.
static NAME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*(-[A-Za-z0-9]+)*$").unwrap());

/// An element token may itself be a nested-element chain
/// (`group__label`); each `__`-separated segment must still be a valid
/// kebab-case name token.
static ELEMENT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9]*(-[A-Za-z0-9]+)*(__[A-Za-z][A-Za-z0-9]*(-[A-Za-z0-9]+)*)*$")
        .unwrap()
});

/// The parsed (block, element, modifier) triple for a selector name.
/// Classification precedence is ElementModifier, then Modifier, then
/// Element, then Block — first match wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedName {
    pub block: Option<String>,
    pub element: Option<String>,
    pub modifier: Option<String>,
    pub classification: BemClassification,
}

pub fn parse_name(name: &str) -> ParsedName {
    if let Some(element_idx) = name.find("__") {
        let block = &name[..element_idx];
        let rest = &name[element_idx + 2..];

        if let Some(modifier_idx) = rest.rfind("--") {
            let element = &rest[..modifier_idx];
            let modifier = &rest[modifier_idx + 2..];
            if NAME_TOKEN.is_match(block)
                && !element.is_empty()
                && ELEMENT_TOKEN.is_match(element)
                && NAME_TOKEN.is_match(modifier)
            {
                return ParsedName {
                    block: Some(block.to_string()),
                    element: Some(element.to_string()),
                    modifier: Some(modifier.to_string()),
                    classification: BemClassification::ElementModifier,
                };
            }
        } else if NAME_TOKEN.is_match(block) && !rest.is_empty() && ELEMENT_TOKEN.is_match(rest) {
            return ParsedName {
                block: Some(block.to_string()),
                element: Some(rest.to_string()),
                modifier: None,
                classification: BemClassification::Element,
            };
        }
    } else if let Some(modifier_idx) = name.find("--") {
        let block = &name[..modifier_idx];
        let modifier = &name[modifier_idx + 2..];
        if NAME_TOKEN.is_match(block) && NAME_TOKEN.is_match(modifier) {
            return ParsedName {
                block: Some(block.to_string()),
                element: None,
                modifier: Some(modifier.to_string()),
                classification: BemClassification::Modifier,
            };
        }
    } else if NAME_TOKEN.is_match(name) {
        return ParsedName {
            block: Some(name.to_string()),
            element: None,
            modifier: None,
            classification: BemClassification::Block,
        };
    }

    ParsedName {
        block: None,
        element: None,
        modifier: None,
        classification: BemClassification::Unclassified,
    }
}

/// Reconstructs a selector name from a (block, element, modifier) triple.
/// `parse_name(reconstruct(parse_name(n)))` round-trips for any `n` that
/// parsed successfully.
pub fn reconstruct(block: &str, element: Option<&str>, modifier: Option<&str>) -> String {
    let mut name = block.to_string();
    if let Some(element) = element {
        name.push_str("__");
        name.push_str(element);
    }
    if let Some(modifier) = modifier {
        name.push_str("--");
        name.push_str(modifier);
    }
    name
}

/// The name a component would have without its modifier, i.e. the base
/// this component's `Modifier`/`ElementModifier` relationship points from.
pub fn base_without_modifier(parsed: &ParsedName) -> Option<String> {
    let block = parsed.block.as_ref()?;
    Some(reconstruct(block, parsed.element.as_deref(), None))
}

/// The name of the immediate containing component a component's `Parent`
/// relationship points from. For a single-segment element this is the block
/// (`form__group` → `form`); for a nested element chain it is the next
/// level up, not the top-level block (`form__group__label` → `form__group`),
/// so a nested tree links through its intermediate components rather than
/// collapsing straight to the root.
pub fn parent_name(parsed: &ParsedName) -> Option<String> {
    let block = parsed.block.as_ref()?;
    let element = parsed.element.as_ref()?;
    match element.rfind("__") {
        Some(idx) => Some(reconstruct(block, Some(&element[..idx]), None)),
        None => Some(block.clone()),
    }
}

/// Rewrites a non-parsing name into a plausible BEM-style name: lower
/// camelCase to kebab-case, `_` to `-`, collapse `---` to `--`, strip
/// verbose `--modifier-`/`--variant-`/`__element-` prefixes.
pub fn suggest_bem_name(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                kebab.push('-');
            }
            kebab.extend(ch.to_lowercase());
        } else {
            kebab.push(ch);
        }
    }

    let mut rewritten = kebab.replace('_', "-");
    while rewritten.contains("---") {
        rewritten = rewritten.replace("---", "--");
    }

    for verbose in ["--modifier-", "--variant-", "__element-"] {
        if let Some(idx) = rewritten.find(verbose) {
            let separator = &verbose[..2];
            rewritten.replace_range(idx..idx + verbose.len(), separator);
        }
    }

    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_block() {
        let parsed = parse_name("button");
        assert_eq!(parsed.classification, BemClassification::Block);
    }

    #[test]
    fn classifies_element() {
        let parsed = parse_name("form__group");
        assert_eq!(parsed.classification, BemClassification::Element);
        assert_eq!(parsed.block.as_deref(), Some("form"));
        assert_eq!(parsed.element.as_deref(), Some("group"));
    }

    #[test]
    fn classifies_modifier() {
        let parsed = parse_name("button--primary");
        assert_eq!(parsed.classification, BemClassification::Modifier);
        assert_eq!(parsed.modifier.as_deref(), Some("primary"));
    }

    #[test]
    fn classifies_element_modifier() {
        let parsed = parse_name("form__group--horizontal");
        assert_eq!(parsed.classification, BemClassification::ElementModifier);
        assert_eq!(parsed.block.as_deref(), Some("form"));
        assert_eq!(parsed.element.as_deref(), Some("group"));
        assert_eq!(parsed.modifier.as_deref(), Some("horizontal"));
    }

    #[test]
    fn classifies_nested_element() {
        let parsed = parse_name("form__group__label");
        assert_eq!(parsed.classification, BemClassification::Element);
        assert_eq!(parsed.element.as_deref(), Some("group__label"));
    }

    #[test]
    fn camel_case_and_underscore_names_fail_to_parse() {
        assert_eq!(
            parse_name("buttonPrimary").classification,
            BemClassification::Unclassified
        );
        assert_eq!(
            parse_name("button_secondary").classification,
            BemClassification::Unclassified
        );
    }

    #[test]
    fn naming_suggestions_match_seed_case() {
        assert_eq!(suggest_bem_name("buttonPrimary"), "button-primary");
        assert_eq!(suggest_bem_name("button_secondary"), "button-secondary");
    }

    #[test]
    fn parse_reconstruct_round_trips() {
        for name in [
            "button",
            "button--primary",
            "form__group",
            "form__group--horizontal",
            "form__group__label",
        ] {
            let parsed = parse_name(name);
            assert_ne!(parsed.classification, BemClassification::Unclassified);
            let rebuilt = reconstruct(
                parsed.block.as_deref().unwrap(),
                parsed.element.as_deref(),
                parsed.modifier.as_deref(),
            );
            assert_eq!(rebuilt, name);
            assert_eq!(parse_name(&rebuilt), parsed);
        }
    }
}
