pub mod analyze;
pub mod build;
pub mod init;
pub mod serve;
pub mod tokens;
pub mod validate;
pub mod watch;

use std::path::Path;

use anyhow::Context;

use crate::core::StyleCorpus;
use crate::corpus::{self, DesignDocument, RawValue};

/// Reads and lowers the YAML corpus file at `path` into a `StyleCorpus`,
/// shared by every subcommand that needs the core's view of the corpus.
pub fn load_corpus(path: &Path) -> anyhow::Result<StyleCorpus> {
    let (_, corpus) = load_document_and_corpus(path)?;
    Ok(corpus)
}

/// Reads and lowers the YAML corpus file, returning both the raw
/// `DesignDocument` (for subcommands like `tokens` that need fields the
/// core never sees) and the lowered `StyleCorpus`.
pub fn load_document_and_corpus(path: &Path) -> anyhow::Result<(DesignDocument, StyleCorpus)> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading corpus file {}", path.display()))?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing {} as YAML", path.display()))?;
    let raw = RawValue::from(yaml);
    let document = DesignDocument::from_raw(&raw);
    let corpus = corpus::lower(&document);
    Ok((document, corpus))
}
