//! Computed record and report total models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One employee-day with its derived metrics.
///
/// Carries every field of the source punch record plus the worked, late,
/// overtime, and pay figures. The minute fields are rounded to two decimal
/// places and `pay_amount` to a whole currency unit; the calculator's
/// internal arithmetic is unrounded until that final step.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ComputedRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = ComputedRecord {
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     employee_id: "1042".to_string(),
///     employee_name: "Sara Ahmed".to_string(),
///     first_in: "08:05:00".to_string(),
///     last_out: "17:20:00".to_string(),
///     worked_minutes: Decimal::from_str("555").unwrap(),
///     late_minutes: Decimal::from_str("5").unwrap(),
///     overtime_minutes: Decimal::from_str("20").unwrap(),
///     pay_amount: Decimal::from_str("2775").unwrap(),
/// };
/// assert_eq!(record.pay_amount, Decimal::from_str("2775").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedRecord {
    /// The calendar date the punches were recorded on.
    pub date: NaiveDate,
    /// Opaque employee identifier, carried through unchanged.
    pub employee_id: String,
    /// Display name, carried through unchanged.
    pub employee_name: String,
    /// The earliest punch of the day, as extracted.
    pub first_in: String,
    /// The latest punch of the day, as extracted.
    pub last_out: String,
    /// Minutes between first-in and last-out. May be negative when the
    /// source punches were out of order; the value is propagated as-is.
    pub worked_minutes: Decimal,
    /// Minutes of lateness past the shift start. Never negative.
    pub late_minutes: Decimal,
    /// Minutes worked past the shift end. Never negative.
    pub overtime_minutes: Decimal,
    /// Daily pay in whole currency units.
    pub pay_amount: Decimal,
}

/// Aggregate totals over a computed report.
///
/// Sums are taken over the already-rounded per-record values, so the totals
/// reproduce exactly what the per-record figures show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Sum of all per-record pay amounts.
    pub total_pay: Decimal,
    /// Sum of all per-record overtime minutes.
    pub total_overtime_minutes: Decimal,
}
