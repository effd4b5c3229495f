use std::path::Path;

use comfy_table::Table;

use super::load_document_and_corpus;

/// Dumps the resolved design-token table, applying `theme`'s override when
/// present.
pub fn run(file: &Path, theme: Option<&str>) -> anyhow::Result<()> {
    let (document, _) = load_document_and_corpus(file)?;

    let mut table = Table::new();
    table.set_header(vec!["token", "value"]);
    for (name, entry) in &document.tokens {
        let value = theme
            .and_then(|theme| entry.theme_overrides.iter().find(|(t, _)| t == theme))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| entry.value.clone());
        table.add_row(vec![name.clone(), value]);
    }

    println!("{table}");
    Ok(())
}
