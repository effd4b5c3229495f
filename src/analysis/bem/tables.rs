use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// Built-in common-element table: per-block element names a complete
/// component is expected to carry.
pub static COMMON_ELEMENTS: Lazy<BTreeMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    BTreeMap::from([
        ("card", ["header", "body", "footer", "title", "content"].as_slice()),
        ("form", ["group", "label", "input", "error", "help"].as_slice()),
        ("nav", ["item", "link", "icon", "text", "dropdown"].as_slice()),
        ("list", ["item", "header", "content", "footer"].as_slice()),
        ("modal", ["header", "body", "footer", "close", "title"].as_slice()),
        ("table", ["header", "row", "cell", "footer"].as_slice()),
        ("button", ["icon", "text", "badge"].as_slice()),
    ])
});

/// Built-in common-modifier table: per-category modifier names, gated on
/// a block's own declared properties before being suggested.
pub static COMMON_MODIFIERS: Lazy<BTreeMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    BTreeMap::from([
        ("size", ["sm", "md", "lg", "xl"].as_slice()),
        (
            "color",
            ["primary", "secondary", "success", "danger", "warning", "info"].as_slice(),
        ),
        ("state", ["active", "disabled", "loading", "selected", "expanded"].as_slice()),
        ("layout", ["horizontal", "vertical", "compact", "expanded"].as_slice()),
        ("alignment", ["left", "center", "right", "top", "bottom"].as_slice()),
    ])
});

/// Whether a block's own declared property names make a modifier category
/// relevant: `state` is always relevant, the others are gated on the
/// presence of properties that category would plausibly vary.
pub fn category_is_relevant(category: &str, properties: &[String]) -> bool {
    let has = |needles: &[&str]| {
        properties
            .iter()
            .any(|p| needles.iter().any(|n| p.contains(n)))
    };

    match category {
        "state" => true,
        "size" => has(&["width", "height", "size"]),
        "color" => has(&["color", "background"]),
        "layout" => has(&["display", "flex", "grid"]),
        "alignment" => has(&["align", "justify", "text"]),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_elements_table_has_expected_blocks() {
        assert_eq!(
            COMMON_ELEMENTS.get("card"),
            Some(&["header", "body", "footer", "title", "content"].as_slice())
        );
        assert_eq!(COMMON_ELEMENTS.get("button"), Some(&["icon", "text", "badge"].as_slice()));
    }

    #[test]
    fn state_category_is_always_relevant() {
        assert!(category_is_relevant("state", &[]));
    }

    #[test]
    fn size_category_requires_sizing_properties() {
        assert!(!category_is_relevant("size", &["color".to_string()]));
        assert!(category_is_relevant("size", &["width".to_string()]));
    }
}
