//! Batch report computation.
//!
//! This module combines the per-metric calculations into one
//! [`ComputedRecord`](crate::models::ComputedRecord) per punch record and
//! aggregates the report totals.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{ComputedRecord, PunchRecord, RateTable, ReportTotals, ShiftSchedule};

use super::daily_pay::daily_pay;
use super::lateness::late_minutes;
use super::overtime::overtime_minutes;
use super::worked_duration::worked_minutes;

/// How the batch driver reacts to a record whose punches fail to parse.
///
/// The extractor's candidate-time check is only "non-empty and contains a
/// colon", so garbage can reach the calculator; this policy decides what a
/// parse failure does to the rest of the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedRowPolicy {
    /// Abort the whole batch on the first malformed record. The default.
    #[default]
    FailFast,
    /// Drop malformed records and keep computing the rest.
    Skip,
}

/// Parses a punch string strictly as `HH:MM:SS`.
fn parse_punch(value: &str, record: &PunchRecord) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S").map_err(|_| EngineError::MalformedTimestamp {
        value: value.to_string(),
        date: record.date,
        employee_id: record.employee_id.clone(),
    })
}

/// Computes the metrics for a single punch record.
///
/// The punch strings are validated here, as the last line of defense
/// behind the extractor's lenient heuristics: anything that does not parse
/// as `HH:MM:SS` fails the record with
/// [`EngineError::MalformedTimestamp`] rather than being coerced.
///
/// An employee id absent from the rate table resolves to a zero rate, so
/// new employees are paid nothing until a rate is set. The output minute
/// fields are rounded to two decimal places and the pay to a whole unit;
/// pay is computed from the unrounded worked duration.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_record;
/// use payroll_engine::models::{PunchRecord, RateTable, ShiftSchedule};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = PunchRecord {
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     employee_id: "1042".to_string(),
///     employee_name: "Sara".to_string(),
///     first_in: "08:05:00".to_string(),
///     last_out: "17:20:00".to_string(),
/// };
/// let schedule = ShiftSchedule::new(
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// );
/// let mut rates = RateTable::new();
/// rates.set("1042", Decimal::from_str("5.0").unwrap());
///
/// let computed = compute_record(&record, &schedule, &rates).unwrap();
/// assert_eq!(computed.worked_minutes, Decimal::from(555));
/// assert_eq!(computed.pay_amount, Decimal::from(2775));
/// ```
pub fn compute_record(
    record: &PunchRecord,
    schedule: &ShiftSchedule,
    rates: &RateTable,
) -> EngineResult<ComputedRecord> {
    let clock_in = record.date.and_time(parse_punch(&record.first_in, record)?);
    let clock_out = record.date.and_time(parse_punch(&record.last_out, record)?);

    let worked = worked_minutes(clock_in, clock_out);
    let late = late_minutes(clock_in, schedule.start_on(record.date));
    let overtime = overtime_minutes(clock_out, schedule.end_on(record.date));
    let pay = daily_pay(worked, rates.get(&record.employee_id));

    Ok(ComputedRecord {
        date: record.date,
        employee_id: record.employee_id.clone(),
        employee_name: record.employee_name.clone(),
        first_in: record.first_in.clone(),
        last_out: record.last_out.clone(),
        worked_minutes: worked.round_dp(2),
        late_minutes: late.round_dp(2),
        overtime_minutes: overtime.round_dp(2),
        pay_amount: pay,
    })
}

/// Computes a full report: one record per input record plus totals.
///
/// Pure function of its inputs; the rate table is never mutated, and
/// re-running on the same inputs yields identical output. Records are
/// computed independently and returned in input order.
///
/// Totals sum the already-rounded per-record `pay_amount` and
/// `overtime_minutes`, so they reproduce exactly what the per-record
/// figures show.
///
/// # Errors
///
/// With [`MalformedRowPolicy::FailFast`] (the default) the first record
/// whose punches fail to parse aborts the whole batch; with
/// [`MalformedRowPolicy::Skip`] such records are dropped and the rest are
/// computed.
pub fn compute_report(
    records: &[PunchRecord],
    schedule: &ShiftSchedule,
    rates: &RateTable,
    policy: MalformedRowPolicy,
) -> EngineResult<(Vec<ComputedRecord>, ReportTotals)> {
    let mut computed = Vec::with_capacity(records.len());
    for record in records {
        match (compute_record(record, schedule, rates), policy) {
            (Ok(result), _) => computed.push(result),
            (Err(err), MalformedRowPolicy::FailFast) => return Err(err),
            (Err(_), MalformedRowPolicy::Skip) => {}
        }
    }

    let totals = ReportTotals {
        total_pay: computed.iter().map(|r| r.pay_amount).sum::<Decimal>(),
        total_overtime_minutes: computed
            .iter()
            .map(|r| r.overtime_minutes)
            .sum::<Decimal>(),
    };
    Ok((computed, totals))
}
