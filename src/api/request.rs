//! Request types for the payroll engine API.

use chrono::NaiveTime;
use serde::Deserialize;

/// Query parameters overriding the configured shift window.
///
/// Both fields are optional; an omitted side falls back to the value from
/// the engine configuration.
///
/// # Example
///
/// `POST /report?start=08:00:00&end=17:00:00`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ShiftWindowQuery {
    /// Override for the official shift start.
    pub start: Option<NaiveTime>,
    /// Override for the official shift end.
    pub end: Option<NaiveTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_both_overrides() {
        let query: ShiftWindowQuery =
            serde_json::from_str(r#"{"start":"08:30:00","end":"16:00:00"}"#).unwrap();
        assert_eq!(query.start.unwrap().to_string(), "08:30:00");
        assert_eq!(query.end.unwrap().to_string(), "16:00:00");
    }

    #[test]
    fn test_both_sides_are_optional() {
        let query: ShiftWindowQuery = serde_json::from_str("{}").unwrap();
        assert!(query.start.is_none());
        assert!(query.end.is_none());
    }
}
