use crate::core::{Rule, StyleCorpus};

/// Turns the input corpus into the canonical flat rule list. The corpus is
/// already a flat, ordered `Vec<Rule>` by construction, so extraction here
/// is the identity — preserved as its own pipeline stage because the
/// external schema lowering (`styleloom::corpus`) is what actually does the
/// flattening, and this is the seam the core receives it through. No
/// failure mode: a rule with no properties is kept.
pub fn extract_rules(corpus: &StyleCorpus) -> Vec<&Rule> {
    corpus.iter().collect()
}
