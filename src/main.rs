use clap::Parser;

use styleloom::cli::{self, Cli};
use styleloom::observability;

fn main() {
    let cli = Cli::parse();
    observability::init_tracing();

    if let Err(error) = cli::run(cli) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
