use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber reading its filter from
/// `STYLELOOM_LOG` (falling back to `info`). Safe to call more than
/// once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("STYLELOOM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
