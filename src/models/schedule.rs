//! Shift schedule model.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The official shift window lateness and overtime are measured against.
///
/// Cross-midnight shifts are not supported: both times are plain
/// times-of-day combined with the record's date. If `end_time` is not after
/// `start_time` the overtime formula still applies mechanically; the engine
/// does not special-case it.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ShiftSchedule;
/// use chrono::NaiveTime;
///
/// let schedule = ShiftSchedule::new(
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// );
/// assert_eq!(schedule.start_time.to_string(), "08:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    /// The official start of the shift.
    pub start_time: NaiveTime,
    /// The official end of the shift.
    pub end_time: NaiveTime,
}

impl ShiftSchedule {
    /// Creates a schedule from a start and end time-of-day.
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// The shift start anchored to a calendar date.
    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start_time)
    }

    /// The shift end anchored to a calendar date.
    pub fn end_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> ShiftSchedule {
        ShiftSchedule::new(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_anchoring_to_a_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(schedule().start_on(date).to_string(), "2025-03-14 08:00:00");
        assert_eq!(schedule().end_on(date).to_string(), "2025-03-14 17:00:00");
    }

    #[test]
    fn test_inverted_window_is_representable() {
        // end <= start is kept as-is; the calculator applies the formulas
        // mechanically rather than rejecting the window.
        let inverted = ShiftSchedule::new(
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        );
        assert!(inverted.end_time < inverted.start_time);
    }

    #[test]
    fn test_serialization_round_trip() {
        let json = serde_json::to_string(&schedule()).unwrap();
        assert!(json.contains("\"start_time\":\"08:00:00\""));
        let deserialized: ShiftSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule(), deserialized);
    }
}
