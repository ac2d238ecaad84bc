// ============================================================================
// Domain Models Module
// Display modes, global configuration and per-call options
// ============================================================================

pub mod config;
pub mod modes;
pub mod options;

pub use config::{configure, current, reset, ConfigUpdate, GlobalConfig, GROUP_SIZE_RANGE};
pub use modes::{ExplicitDirection, RoundMode, ShrinkZeroMode};
pub use options::{FormatOptions, ResolvedOptions};
