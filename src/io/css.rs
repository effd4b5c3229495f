use crate::core::StyleCorpus;

/// Emits a plain CSS stylesheet, one rule block per `Rule` in corpus
/// order. `scss`/`tailwind` reuse this ordering and only vary the
/// per-declaration syntax, so this is the one dialect every other
/// stylesheet emitter is checked against.
pub fn emit(corpus: &StyleCorpus, minify: bool) -> String {
    let mut out = String::new();
    for rule in corpus.iter() {
        if rule.properties.is_empty() {
            continue;
        }
        if minify {
            out.push_str(&rule.selector);
            out.push('{');
            for (property, value) in rule.properties.iter() {
                out.push_str(property);
                out.push(':');
                out.push_str(value);
                out.push(';');
            }
            out.push('}');
        } else {
            out.push_str(&rule.selector);
            out.push_str(" {\n");
            for (property, value) in rule.properties.iter() {
                out.push_str(&format!("  {property}: {value};\n"));
            }
            out.push_str("}\n\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PropertyMap, Rule};

    #[test]
    fn emits_one_block_per_rule() {
        let mut props = PropertyMap::new();
        props.insert("color", "red");
        let corpus = StyleCorpus::new(vec![Rule::with_properties("a", props)]);
        let css = emit(&corpus, false);
        assert!(css.contains("a {"));
        assert!(css.contains("color: red;"));
    }

    #[test]
    fn minified_output_has_no_whitespace_padding() {
        let mut props = PropertyMap::new();
        props.insert("color", "red");
        let corpus = StyleCorpus::new(vec![Rule::with_properties("a", props)]);
        let css = emit(&corpus, true);
        assert_eq!(css, "a{color:red;}");
    }

    #[test]
    fn rules_with_no_properties_are_skipped() {
        let corpus = StyleCorpus::new(vec![Rule::new("empty")]);
        assert_eq!(emit(&corpus, false), "");
    }
}
