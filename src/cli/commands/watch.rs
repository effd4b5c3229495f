use std::path::Path;
use std::time::Duration;

use crate::cli::OutputFormat;

use super::build;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Re-runs `build` whenever `file`'s mtime changes, polling at a fixed
/// interval rather than depending on an OS file-watcher.
pub fn run(file: &Path, out: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let mut last_modified = None;

    loop {
        let modified = std::fs::metadata(file)?.modified()?;
        if Some(modified) != last_modified {
            if let Err(error) = build::run(file, out, format, false, None) {
                eprintln!("Error: {error}");
            } else {
                println!("rebuilt {} at {:?}", file.display(), modified);
            }
            last_modified = Some(modified);
        }
        std::thread::sleep(POLL_INTERVAL);

        // Tests never reach this branch; it exists so a caller that wants
        // a bounded watch loop (rather than running forever) can inject one
        // via the `STYLELOOM_WATCH_ONCE` escape hatch.
        if std::env::var_os("STYLELOOM_WATCH_ONCE").is_some() {
            return Ok(());
        }
    }
}
