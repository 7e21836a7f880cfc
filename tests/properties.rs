//! Property tests for the extraction ordering invariant and the metric
//! clamping guarantees.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::compute_record;
use payroll_engine::models::{PunchRecord, RateTable, ShiftSchedule};

fn hms() -> impl Strategy<Value = (u32, u32, u32)> {
    (0u32..24, 0u32..60, 0u32..60)
}

fn format_hms((h, m, s): (u32, u32, u32)) -> String {
    format!("{h:02}:{m:02}:{s:02}")
}

fn record(first_in: &str, last_out: &str) -> PunchRecord {
    PunchRecord {
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        employee_id: "1042".to_string(),
        employee_name: "Sara".to_string(),
        first_in: first_in.to_string(),
        last_out: last_out.to_string(),
    }
}

proptest! {
    /// Selecting first-in/last-out by string min/max is only sound because
    /// zero-padded HH:MM:SS strings order exactly like the times they
    /// denote.
    #[test]
    fn lexicographic_order_equals_chronological_order(a in hms(), b in hms()) {
        let (sa, sb) = (format_hms(a), format_hms(b));
        let ta = NaiveTime::from_hms_opt(a.0, a.1, a.2).unwrap();
        let tb = NaiveTime::from_hms_opt(b.0, b.1, b.2).unwrap();
        prop_assert_eq!(sa.cmp(&sb), ta.cmp(&tb));
    }

    /// Lateness and overtime are clamped at zero for every combination of
    /// punch and shift window, including inverted windows.
    #[test]
    fn late_and_overtime_are_never_negative(
        first in hms(),
        last in hms(),
        start in hms(),
        end in hms(),
    ) {
        let (a, b) = (format_hms(first), format_hms(last));
        let (first_in, last_out) = if a <= b { (a, b) } else { (b, a) };
        let schedule = ShiftSchedule::new(
            NaiveTime::from_hms_opt(start.0, start.1, start.2).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, end.2).unwrap(),
        );

        let computed = compute_record(
            &record(&first_in, &last_out),
            &schedule,
            &RateTable::new(),
        ).unwrap();

        prop_assert!(computed.late_minutes >= Decimal::ZERO);
        prop_assert!(computed.overtime_minutes >= Decimal::ZERO);
        prop_assert!(computed.worked_minutes >= Decimal::ZERO);
    }

    /// An employee missing from the rate table is paid exactly zero no
    /// matter how long the day was.
    #[test]
    fn unknown_employee_is_never_paid(first in hms(), last in hms()) {
        let schedule = ShiftSchedule::new(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        );

        let computed = compute_record(
            &record(&format_hms(first), &format_hms(last)),
            &schedule,
            &RateTable::new(),
        ).unwrap();

        prop_assert_eq!(computed.pay_amount, Decimal::ZERO);
    }

    /// Equal punches always mean a zero-minute day.
    #[test]
    fn equal_punches_work_zero_minutes(punch in hms()) {
        let text = format_hms(punch);
        let schedule = ShiftSchedule::new(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        );

        let computed = compute_record(
            &record(&text, &text),
            &schedule,
            &RateTable::new(),
        ).unwrap();

        prop_assert_eq!(computed.worked_minutes, Decimal::ZERO);
        prop_assert_eq!(computed.pay_amount, Decimal::ZERO);
    }
}
