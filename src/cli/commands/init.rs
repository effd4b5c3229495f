use std::path::Path;

use anyhow::Context;

const STARTER_CORPUS: &str = r#"version: "1.0.0"

tokens:
  color-primary: "#3b82f6"
  spacing-md: "1rem"

components:
  card:
    base:
      styles:
        - padding: "1rem"
        - border-radius: "4px"
    parts:
      header:
        styles:
          - font-weight: "bold"
    variants:
      compact:
        styles:
          - padding: "0.25rem"
"#;

/// Scaffolds a starter corpus file at `out`.
pub fn run(out: &Path) -> anyhow::Result<()> {
    if out.exists() {
        anyhow::bail!("{} already exists; remove it first", out.display());
    }
    std::fs::write(out, STARTER_CORPUS).with_context(|| format!("writing {}", out.display()))?;
    println!("wrote starter corpus to {}", out.display());
    Ok(())
}
