//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod computed_record;
mod punch_record;
mod rate_table;
mod schedule;

pub use computed_record::{ComputedRecord, ReportTotals};
pub use punch_record::PunchRecord;
pub use rate_table::RateTable;
pub use schedule::ShiftSchedule;
