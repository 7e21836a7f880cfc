//! Metric calculation for the payroll engine.
//!
//! This module contains the calculation functions for deriving worked
//! duration, lateness, overtime, and daily pay from punch records, plus
//! the batch driver that produces a full computed report with totals.
//!
//! Every function here is pure: records are computed independently, the
//! rate table is only read, and identical inputs always produce identical
//! outputs.

mod daily_pay;
mod lateness;
mod overtime;
mod report;
mod worked_duration;

pub use daily_pay::daily_pay;
pub use lateness::late_minutes;
pub use overtime::overtime_minutes;
pub use report::{MalformedRowPolicy, compute_record, compute_report};
pub use worked_duration::worked_minutes;
