//! Worked duration calculation.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Signed minutes from `from` to `to`, with sub-minute precision kept as a
/// decimal fraction.
pub(super) fn signed_minutes(from: NaiveDateTime, to: NaiveDateTime) -> Decimal {
    Decimal::from((to - from).num_seconds()) / Decimal::from(60)
}

/// Minutes between clock-in and clock-out.
///
/// The result is NOT clamped at zero: the extractor's min/max selection
/// guarantees `clock_out >= clock_in` for well-formed input, and when a
/// malformed source ever yields otherwise the negative duration is
/// propagated uncorrected so the bad data stays visible instead of being
/// silently flipped.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::worked_minutes;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let clock_in = "2025-03-14T08:05:00".parse::<NaiveDateTime>().unwrap();
/// let clock_out = "2025-03-14T17:20:00".parse::<NaiveDateTime>().unwrap();
/// assert_eq!(worked_minutes(clock_in, clock_out), Decimal::from(555));
/// ```
pub fn worked_minutes(clock_in: NaiveDateTime, clock_out: NaiveDateTime) -> Decimal {
    signed_minutes(clock_in, clock_out)
}
