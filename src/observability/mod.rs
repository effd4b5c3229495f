//! Logging and timing instrumentation around the engine.
//!
//! `tracing_init` sets up process-startup tracing, and `performance` is an
//! RAII-timing collector scoped per `analyze()` call rather than behind a
//! process-wide `OnceLock`, since the core keeps no global mutable state.

mod performance;
mod tracing_init;

pub use performance::{PerformanceTracker, TimingGuard};
pub use tracing_init::init_tracing;
