//! CSV report export.
//!
//! Formats a computed report for spreadsheet consumption. The output is
//! UTF-8 prefixed with a byte-order mark: common spreadsheet tools
//! mis-detect the encoding of Arabic employee names without it.

use crate::error::{EngineError, EngineResult};
use crate::models::ComputedRecord;

/// UTF-8 byte-order mark prepended to the CSV payload.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column headers, in record-field order.
const HEADERS: [&str; 9] = [
    "Date",
    "ID",
    "Name",
    "Time In",
    "Time Out",
    "Worked (mins)",
    "Late (mins)",
    "Overtime (mins)",
    "Pay",
];

fn export_failure(err: impl std::fmt::Display) -> EngineError {
    EngineError::ExportFailure {
        message: err.to_string(),
    }
}

/// Renders computed records as a BOM-prefixed CSV document.
///
/// One header row, one row per record, in record order. Totals are not
/// included; they are presented separately by the caller.
///
/// # Example
///
/// ```
/// use payroll_engine::export::write_csv;
///
/// let csv = write_csv(&[]).unwrap();
/// assert!(csv.starts_with(b"\xEF\xBB\xBF"));
/// ```
pub fn write_csv(records: &[ComputedRecord]) -> EngineResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS).map_err(export_failure)?;
    for record in records {
        writer
            .write_record([
                record.date.to_string(),
                record.employee_id.clone(),
                record.employee_name.clone(),
                record.first_in.clone(),
                record.last_out.clone(),
                record.worked_minutes.to_string(),
                record.late_minutes.to_string(),
                record.overtime_minutes.to_string(),
                record.pay_amount.to_string(),
            ])
            .map_err(export_failure)?;
    }
    let data = writer.into_inner().map_err(export_failure)?;

    let mut out = Vec::with_capacity(UTF8_BOM.len() + data.len());
    out.extend_from_slice(UTF8_BOM);
    out.extend_from_slice(&data);
    Ok(out)
}
