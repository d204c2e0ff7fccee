// ============================================================================
// Logging Setup
// Subscriber installation for test harnesses and simulations
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber filtered by `RUST_LOG`.
///
/// The engine itself only emits events; harnesses call this once at start-up
/// to see rejected operations (`debug`) and compounding terms (`trace`).
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init()
}
