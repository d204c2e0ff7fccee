// ============================================================================
// Utilities Module
// Helpers for harnesses embedding the engine
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
