//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::ShiftSchedule;

/// The configured shift window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Official start of the shift.
    pub start_time: NaiveTime,
    /// Official end of the shift.
    pub end_time: NaiveTime,
}

/// Top-level engine configuration.
///
/// # File format
///
/// ```yaml
/// shift:
///   start_time: "08:00:00"
///   end_time: "17:00:00"
/// rates_path: "employee_rates.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default shift window used when a request does not override it.
    pub shift: ShiftConfig,
    /// Path of the JSON rate store file.
    pub rates_path: String,
}

impl EngineConfig {
    /// The configured default shift window as a schedule.
    pub fn schedule(&self) -> ShiftSchedule {
        ShiftSchedule::new(self.shift.start_time, self.shift.end_time)
    }
}
