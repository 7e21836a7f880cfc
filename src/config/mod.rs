//! Engine configuration.
//!
//! This module provides the YAML-backed configuration that supplies the
//! server's default shift window and the location of the rate store. A
//! per-request shift override always wins over the configured default.

mod loader;
mod types;

pub use types::{EngineConfig, ShiftConfig};
