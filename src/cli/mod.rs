//! The CLI surface: `clap`-derive based, with a
//! `Cli { #[command(subcommand)] command: Commands }` shape.
//! Every subcommand lowers its input file once and hands the resulting
//! `StyleCorpus` to `styleloom::analysis`/`styleloom::io`; none of this
//! module is visible to the core.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ThresholdPreset;

#[derive(Parser, Debug)]
#[command(name = "styleloom", version, about = "Design-token and style-corpus analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit tracing logs at debug level or above.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Stylesheet / report output dialect, chosen with `--format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Css,
    Scss,
    Tailwind,
    Tokens,
    Md,
    Json,
    Dot,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lower the corpus and emit a compiled stylesheet.
    Build {
        #[arg(short, long)]
        file: std::path::PathBuf,
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,
        #[arg(long, value_enum, default_value = "css")]
        format: OutputFormat,
        #[arg(short, long)]
        minify: bool,
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Run the analysis engine and render its result.
    Analyze {
        #[arg(short, long)]
        file: std::path::PathBuf,
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        #[arg(long, value_enum)]
        preset: Option<ThresholdPreset>,
    },
    /// Lower the corpus and report schema warnings without analyzing.
    Validate {
        #[arg(short, long)]
        file: std::path::PathBuf,
    },
    /// Dump the resolved design-token table.
    Tokens {
        #[arg(short, long)]
        file: std::path::PathBuf,
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Scaffold a starter corpus file.
    Init {
        #[arg(short, long, default_value = "styleloom.yaml")]
        out: std::path::PathBuf,
    },
    /// Re-run `build` whenever the input file changes.
    Watch {
        #[arg(short, long)]
        file: std::path::PathBuf,
        #[arg(short, long)]
        out: Option<std::path::PathBuf>,
        #[arg(long, value_enum, default_value = "css")]
        format: OutputFormat,
    },
    /// Build once and serve the result for local preview.
    Serve {
        #[arg(short, long)]
        file: std::path::PathBuf,
        #[arg(long, default_value_t = 4173)]
        port: u16,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Build { file, out, format, minify, theme } => {
            commands::build::run(&file, out.as_deref(), format, minify, theme.as_deref())
        }
        Commands::Analyze { file, out, format, preset } => {
            commands::analyze::run(&file, out.as_deref(), format, preset)
        }
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::Tokens { file, theme } => commands::tokens::run(&file, theme.as_deref()),
        Commands::Init { out } => commands::init::run(&out),
        Commands::Watch { file, out, format } => commands::watch::run(&file, out.as_deref(), format),
        Commands::Serve { file, port } => commands::serve::run(&file, port),
    }
}
