//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while extracting attendance
//! reports and calculating pay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// Skipping a non-data row during extraction is a filtering decision, not
/// an error; nothing in this enum is used for normal control flow.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::TableNotFound;
/// assert_eq!(
///     error.to_string(),
///     "No attendance table found: the document contains no table with both 'ID Number' and 'Date' headers"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No table in the uploaded document matched the attendance header
    /// heuristic. Surfaced to the user as a "fix your export" failure,
    /// never retried automatically.
    #[error(
        "No attendance table found: the document contains no table with both 'ID Number' and 'Date' headers"
    )]
    TableNotFound,

    /// An extracted punch string did not parse as `HH:MM:SS` during metric
    /// calculation. Indicates a false positive of the extractor's lenient
    /// candidate-time detection.
    #[error("Malformed punch timestamp '{value}' for employee '{employee_id}' on {date}")]
    MalformedTimestamp {
        /// The punch text that failed to parse.
        value: String,
        /// The date of the record the punch belongs to.
        date: NaiveDate,
        /// The employee the record belongs to.
        employee_id: String,
    },

    /// The rate store could not be read or written.
    #[error("Rate store failure at '{path}': {message}")]
    PersistenceFailure {
        /// The path of the store that failed.
        path: String,
        /// A description of the underlying cause.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A pay rate submitted through the rates API was invalid.
    #[error("Invalid rate for employee '{employee_id}': {message}")]
    InvalidRate {
        /// The employee the rate was submitted for.
        employee_id: String,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// The CSV report could not be produced.
    #[error("Report export failed: {message}")]
    ExportFailure {
        /// A description of the export error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
