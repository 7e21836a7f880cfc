//! Overtime calculation.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::worked_duration::signed_minutes;

/// Minutes worked past the official shift end.
///
/// Clamped at zero, symmetric to lateness: leaving early is simply zero
/// overtime. When the configured window has `end_time <= start_time` the
/// formula still applies mechanically; there is no special case.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::overtime_minutes;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let shift_end = "2025-03-14T17:00:00".parse::<NaiveDateTime>().unwrap();
/// let clock_out = "2025-03-14T17:20:00".parse::<NaiveDateTime>().unwrap();
/// assert_eq!(overtime_minutes(clock_out, shift_end), Decimal::from(20));
/// ```
pub fn overtime_minutes(clock_out: NaiveDateTime, shift_end: NaiveDateTime) -> Decimal {
    signed_minutes(shift_end, clock_out).max(Decimal::ZERO)
}
