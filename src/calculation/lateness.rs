//! Lateness calculation.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::worked_duration::signed_minutes;

/// Minutes of lateness past the official shift start.
///
/// Clamped at zero: arriving early yields no negative "credit" that could
/// offset lateness elsewhere.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::late_minutes;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let shift_start = "2025-03-14T08:00:00".parse::<NaiveDateTime>().unwrap();
/// let clock_in = "2025-03-14T08:05:00".parse::<NaiveDateTime>().unwrap();
/// assert_eq!(late_minutes(clock_in, shift_start), Decimal::from(5));
/// ```
pub fn late_minutes(clock_in: NaiveDateTime, shift_start: NaiveDateTime) -> Decimal {
    signed_minutes(shift_start, clock_in).max(Decimal::ZERO)
}
