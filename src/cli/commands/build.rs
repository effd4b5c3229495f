use std::path::Path;

use anyhow::Context;

use crate::cli::OutputFormat;
use crate::io;

use super::load_corpus;

pub fn run(
    file: &Path,
    out: Option<&Path>,
    format: OutputFormat,
    minify: bool,
    _theme: Option<&str>,
) -> anyhow::Result<()> {
    let corpus = load_corpus(file)?;

    let rendered = match format {
        // SCSS is a strict superset of CSS; this dialect's declarations
        // never need anything CSS doesn't already express.
        OutputFormat::Css | OutputFormat::Scss => io::css::emit(&corpus, minify),
        OutputFormat::Tailwind => tailwind_candidates(&corpus),
        OutputFormat::Json => io::json::emit(&corpus)?,
        OutputFormat::Dot | OutputFormat::Md | OutputFormat::Tokens => {
            anyhow::bail!("{:?} is not a stylesheet dialect `build` can emit", format)
        }
    };

    match out {
        Some(path) => std::fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Lists the distinct `property: value` pairs in the corpus as candidate
/// Tailwind-style utility class names, one per line.
fn tailwind_candidates(corpus: &crate::core::StyleCorpus) -> String {
    let mut seen = std::collections::BTreeSet::new();
    for rule in corpus.iter() {
        for (property, value) in rule.properties.iter() {
            seen.insert(format!(".{}-{} {{ {}: {}; }}", property, value.replace(['.', ' '], "-"), property, value));
        }
    }
    seen.into_iter().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PropertyMap, Rule, StyleCorpus};

    #[test]
    fn tailwind_candidates_deduplicate_property_value_pairs() {
        let mut props = PropertyMap::new();
        props.insert("padding", "1rem");
        let corpus = StyleCorpus::new(vec![
            Rule::with_properties("a", props.clone()),
            Rule::with_properties("b", props),
        ]);
        let out = tailwind_candidates(&corpus);
        assert_eq!(out.lines().count(), 1);
    }
}
