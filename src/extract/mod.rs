//! Report extraction.
//!
//! This module turns a raw biometric time-clock HTML export into an ordered
//! sequence of [`PunchRecord`](crate::models::PunchRecord)s: byte decoding
//! with a Windows-1252 fallback, tolerant table scanning, attendance-table
//! selection, and row filtering.
//!
//! The extraction heuristics are deliberately lenient, inherited from the
//! source format: the attendance table is recognised by its visible text
//! containing both "id number" and "date", and a punch candidate is any
//! non-empty cell containing a colon. Tightening either check could drop
//! legitimate but oddly formatted exports, so they are preserved as-is;
//! garbage admitted here is rejected downstream by the calculator.

mod decode;
mod html;
mod report;

pub use decode::decode_report_bytes;
pub use report::{extract_records, extract_records_from_bytes};
