use std::path::Path;

use colored::Colorize;
use comfy_table::Table;

use super::load_document_and_corpus;

/// Lowers the corpus and reports schema observations as a table, without
/// running the analysis engine.
pub fn run(file: &Path) -> anyhow::Result<()> {
    let (document, corpus) = load_document_and_corpus(file)?;

    let mut table = Table::new();
    table.set_header(vec!["check", "result"]);
    table.add_row(vec!["rules lowered".to_string(), corpus.len().to_string()]);
    table.add_row(vec!["components declared".to_string(), document.components.len().to_string()]);
    table.add_row(vec!["tokens declared".to_string(), document.tokens.len().to_string()]);
    table.add_row(vec!["street selectors".to_string(), document.street.len().to_string()]);

    if corpus.is_empty() {
        println!("{}", "warning: corpus lowered to zero rules".yellow());
    }

    println!("{table}");
    Ok(())
}
