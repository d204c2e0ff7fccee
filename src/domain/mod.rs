// ============================================================================
// Domain Module
// Configuration for the fixed-point engine
// ============================================================================

pub mod config;

pub use config::{CompoundConfig, DisplayConfig, DEFAULT_COMPOUND_TERMS};
