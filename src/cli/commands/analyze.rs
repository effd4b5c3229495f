use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use comfy_table::Table;

use crate::analysis::{self, CancellationToken};
use crate::cli::OutputFormat;
use crate::config::{self, ConfigOverrides, ThresholdPreset};
use crate::io;

use super::load_corpus;

pub fn run(
    file: &Path,
    out: Option<&Path>,
    format: OutputFormat,
    preset: Option<ThresholdPreset>,
) -> anyhow::Result<()> {
    let corpus = load_corpus(file)?;

    let overrides = ConfigOverrides {
        preset,
        ..ConfigOverrides::default()
    };
    let config = config::load(Some(Path::new("styleloom.toml")), &overrides)?;

    let result = analysis::analyze(&corpus, &config, &CancellationToken::new())
        .map_err(|errors| anyhow::anyhow!("invalid configuration: {:?}", errors))?;

    let rendered = match format {
        OutputFormat::Json => io::json::emit(&result)?,
        OutputFormat::Md => io::markdown::emit(&result),
        OutputFormat::Dot => io::dot::emit(&result.bem),
        OutputFormat::Css | OutputFormat::Scss | OutputFormat::Tailwind | OutputFormat::Tokens => {
            render_table(&result)
        }
    };

    match out {
        Some(path) => std::fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_table(result: &crate::core::AnalysisResult) -> String {
    let mut table = Table::new();
    table.set_header(vec!["kind", "description", "confidence"]);
    for suggestion in &result.suggestions {
        table.add_row(vec![
            format!("{:?}", suggestion.kind),
            suggestion.description.clone(),
            format!("{:.2}", suggestion.confidence),
        ]);
    }
    format!(
        "{}\n{}",
        format!(
            "{} rules, {} clusters, {} suggestions",
            result.metrics.total_rules,
            result.clusters.len(),
            result.suggestions.len()
        )
        .bold(),
        table
    )
}
