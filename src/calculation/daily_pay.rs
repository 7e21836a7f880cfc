//! Daily pay calculation.

use rust_decimal::Decimal;

/// Daily pay: worked minutes times rate-per-minute, rounded to a whole
/// currency unit (the currency has no cents).
///
/// Rounding is banker's rounding (midpoint to even), and it happens here
/// only, on the final product; `worked_minutes` must be passed in
/// unrounded.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::daily_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let worked = Decimal::from(555);
/// let rate = Decimal::from_str("5.0").unwrap();
/// assert_eq!(daily_pay(worked, rate), Decimal::from(2775));
/// ```
pub fn daily_pay(worked_minutes: Decimal, rate_per_minute: Decimal) -> Decimal {
    (worked_minutes * rate_per_minute).round_dp(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_unit_product() {
        assert_eq!(daily_pay(dec("555"), dec("5.0")), dec("2775"));
    }

    #[test]
    fn test_zero_rate_pays_nothing() {
        assert_eq!(daily_pay(dec("555"), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_zero_minutes_pay_nothing() {
        assert_eq!(daily_pay(Decimal::ZERO, dec("5.0")), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_product_rounds_to_whole_unit() {
        assert_eq!(daily_pay(dec("100"), dec("0.333")), dec("33"));
        assert_eq!(daily_pay(dec("100"), dec("0.337")), dec("34"));
    }

    #[test]
    fn test_midpoint_rounds_to_even() {
        assert_eq!(daily_pay(dec("90"), dec("0.05")), dec("4"));
        assert_eq!(daily_pay(dec("110"), dec("0.05")), dec("6"));
    }

    #[test]
    fn test_negative_minutes_produce_negative_pay() {
        // negative worked durations pass through the whole pipeline
        assert_eq!(daily_pay(dec("-540"), dec("5.0")), dec("-2700"));
    }
}
