//! Punch record model.
//!
//! This module defines the [`PunchRecord`] struct, the normalized shape of
//! one employee-day as extracted from a biometric attendance report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee-day reduced to its first and last punch.
///
/// Produced by the report extractor and consumed by the metrics calculator.
/// The punch fields carry the raw cell text as it appeared in the report;
/// they are validated as `HH:MM:SS` only when metrics are calculated, so
/// that a heuristic false positive surfaces as a typed error instead of
/// being silently coerced.
///
/// `first_in` and `last_out` are selected by string min/max over the same
/// candidate set. This is valid only because punch times are zero-padded
/// fixed-width `HH:MM:SS`, where lexicographic order equals chronological
/// order; given they come from one set, `first_in` can never exceed
/// `last_out` (a single-punch day yields `first_in == last_out`).
///
/// # Example
///
/// ```
/// use payroll_engine::models::PunchRecord;
/// use chrono::NaiveDate;
///
/// let record = PunchRecord {
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     employee_id: "1042".to_string(),
///     employee_name: "Sara Ahmed".to_string(),
///     first_in: "08:05:00".to_string(),
///     last_out: "17:20:00".to_string(),
/// };
/// assert_eq!(record.employee_id, "1042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRecord {
    /// The calendar date the punches were recorded on.
    pub date: NaiveDate,
    /// Opaque employee identifier. Numeric-looking ids stay strings; they
    /// are never coerced to numbers anywhere in the pipeline.
    pub employee_id: String,
    /// Display name. Not unique, may be empty.
    pub employee_name: String,
    /// The earliest punch observed for this employee-day, as raw text.
    pub first_in: String,
    /// The latest punch observed for this employee-day, as raw text.
    pub last_out: String,
}
