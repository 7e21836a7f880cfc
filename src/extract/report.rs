//! Attendance report extraction.
//!
//! This module locates the attendance table inside an uploaded HTML
//! document and reduces each qualifying row to one
//! [`PunchRecord`](crate::models::PunchRecord).

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

use super::decode::decode_report_bytes;
use super::html;
use crate::models::PunchRecord;

/// Cell layout of the attendance table: date, id, name, then punches.
const PUNCH_CELLS_START: usize = 3;

/// Minimum cells for a row to qualify as a data row.
const MIN_DATA_CELLS: usize = 5;

/// Extracts punch records from raw report bytes.
///
/// Decodes the bytes first (UTF-8 with a Windows-1252 fallback, see
/// [`decode_report_bytes`]), then behaves exactly like
/// [`extract_records`].
pub fn extract_records_from_bytes(bytes: &[u8]) -> EngineResult<Vec<PunchRecord>> {
    extract_records(&decode_report_bytes(bytes))
}

/// Extracts punch records from a decoded HTML document.
///
/// The attendance table is the first table whose visible text contains
/// both `"id number"` and `"date"` case-insensitively; exports saved with
/// extra wrapper frames or navigation tables still resolve to the right
/// one. Within it, a data row has at least five `<td>` cells and a strict
/// `YYYY-MM-DD` date in the first cell; every other row is skipped
/// silently. Cells from the fourth onward are punch candidates when their
/// trimmed text is non-empty and contains a colon.
///
/// `first_in`/`last_out` are the string min/max of the row's candidates,
/// valid because punch times are zero-padded `HH:MM:SS` (lexicographic
/// order equals chronological order). Rows with no candidates produce no
/// record, and a repeated (employee id, date) pair keeps the first
/// qualifying row, so records come out unique per pair and in source row
/// order.
///
/// # Errors
///
/// [`EngineError::TableNotFound`] when no table matches the header
/// heuristic, or when the matching table yields no records at all; an
/// unusable export surfaces as a typed failure, never as a silently empty
/// report.
///
/// # Example
///
/// ```
/// use payroll_engine::extract::extract_records;
///
/// let doc = r#"<table>
///   <tr><th>Date</th><th>ID Number</th><th>Name</th><th>T1</th><th>T2</th></tr>
///   <tr><td>2025-03-14</td><td>1042</td><td>Sara</td><td>08:05:00</td><td>17:20:00</td></tr>
/// </table>"#;
/// let records = extract_records(doc).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].first_in, "08:05:00");
/// ```
pub fn extract_records(document: &str) -> EngineResult<Vec<PunchRecord>> {
    let document = html::strip_comments(document);

    let table = html::table_blocks(&document)
        .into_iter()
        .find(|block| {
            let text = html::visible_text(block).to_lowercase();
            text.contains("id number") && text.contains("date")
        })
        .ok_or(EngineError::TableNotFound)?;

    let mut records = Vec::new();
    let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();

    for row in html::rows(table) {
        let cells = html::cells(row);
        if cells.len() < MIN_DATA_CELLS {
            continue;
        }
        let Ok(date) = NaiveDate::parse_from_str(&cells[0], "%Y-%m-%d") else {
            continue;
        };

        let punches: Vec<&String> = cells[PUNCH_CELLS_START..]
            .iter()
            .filter(|cell| !cell.is_empty() && cell.contains(':'))
            .collect();
        let (Some(first_in), Some(last_out)) = (punches.iter().min(), punches.iter().max()) else {
            // an employee with no punches that day produces no record
            continue;
        };

        let employee_id = cells[1].clone();
        if !seen.insert((employee_id.clone(), date)) {
            // duplicate (id, date) rows: first wins
            continue;
        }

        records.push(PunchRecord {
            date,
            employee_id,
            employee_name: cells[2].clone(),
            first_in: (**first_in).clone(),
            last_out: (**last_out).clone(),
        });
    }

    if records.is_empty() {
        // a matching table with nothing extractable is the same "fix your
        // export" outcome as no table at all
        return Err(EngineError::TableNotFound);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_doc(rows: &str) -> String {
        format!(
            "<html><body>\
             <table><tr><td>Home</td><td>Reports</td><td>Admin</td></tr></table>\
             <table border=\"1\">\
             <tr><th>Date</th><th>ID Number</th><th>Name</th>\
                 <th>Punch 1</th><th>Punch 2</th><th>Punch 3</th><th>Punch 4</th></tr>\
             {rows}\
             </table></body></html>"
        )
    }

    fn data_row(date: &str, id: &str, name: &str, punches: &[&str]) -> String {
        let mut row = format!("<tr><td>{date}</td><td>{id}</td><td>{name}</td>");
        for punch in punches {
            row.push_str(&format!("<td>{punch}</td>"));
        }
        for _ in punches.len()..4 {
            row.push_str("<td></td>");
        }
        row.push_str("</tr>");
        row
    }

    #[test]
    fn test_extracts_one_record_per_data_row_in_order() {
        let doc = report_doc(&format!(
            "{}{}",
            data_row("2025-03-14", "1042", "Sara", &["08:05:00", "17:20:00"]),
            data_row("2025-03-14", "1043", "Omar", &["08:00:00", "16:45:00"]),
        ));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].employee_id, "1042");
        assert_eq!(records[1].employee_id, "1043");
    }

    #[test]
    fn test_decoy_table_is_skipped() {
        let doc = report_doc(&data_row("2025-03-14", "1042", "Sara", &["08:05:00"]));
        let records = extract_records(&doc).unwrap();
        // the navigation table comes first in the document but lacks the
        // header text, so the attendance table is selected
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_name, "Sara");
    }

    #[test]
    fn test_document_without_attendance_table_fails() {
        let doc = "<table><tr><td>Menu</td></tr></table>";
        assert!(matches!(
            extract_records(doc),
            Err(EngineError::TableNotFound)
        ));
    }

    #[test]
    fn test_matching_table_with_no_data_rows_fails() {
        let doc = report_doc("");
        assert!(matches!(
            extract_records(&doc),
            Err(EngineError::TableNotFound)
        ));
    }

    #[test]
    fn test_first_in_and_last_out_are_min_and_max() {
        let doc = report_doc(&data_row(
            "2025-03-14",
            "1042",
            "Sara",
            &["12:00:00", "08:05:00", "17:20:00", "13:00:00"],
        ));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records[0].first_in, "08:05:00");
        assert_eq!(records[0].last_out, "17:20:00");
    }

    #[test]
    fn test_single_punch_yields_equal_in_and_out() {
        let doc = report_doc(&data_row("2025-03-14", "1042", "Sara", &["09:00:00"]));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records[0].first_in, "09:00:00");
        assert_eq!(records[0].last_out, "09:00:00");
    }

    #[test]
    fn test_row_with_no_punches_is_dropped() {
        let doc = report_doc(&format!(
            "{}{}",
            data_row("2025-03-14", "1042", "Sara", &[]),
            data_row("2025-03-14", "1043", "Omar", &["08:00:00"]),
        ));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_id, "1043");
    }

    #[test]
    fn test_row_with_bad_date_is_skipped() {
        let doc = report_doc(&format!(
            "{}{}",
            data_row("14/03/2025", "1042", "Sara", &["08:05:00"]),
            data_row("2025-03-14", "1043", "Omar", &["08:00:00"]),
        ));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_id, "1043");
    }

    #[test]
    fn test_row_with_too_few_cells_is_skipped() {
        let doc = report_doc(&format!(
            "<tr><td>2025-03-14</td><td>1042</td><td>Sara</td><td>08:05:00</td></tr>{}",
            data_row("2025-03-14", "1043", "Omar", &["08:00:00"]),
        ));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_id, "1043");
    }

    #[test]
    fn test_colon_heuristic_admits_non_time_text() {
        // the candidate check is deliberately only "non-empty and contains
        // a colon"; the calculator is the one to reject this later
        let doc = report_doc(&data_row("2025-03-14", "1042", "Sara", &["note: absent"]));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records[0].first_in, "note: absent");
    }

    #[test]
    fn test_cells_without_colon_are_not_punches() {
        let doc = report_doc(&data_row(
            "2025-03-14",
            "1042",
            "Sara",
            &["present", "08:05:00"],
        ));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records[0].first_in, "08:05:00");
        assert_eq!(records[0].last_out, "08:05:00");
    }

    #[test]
    fn test_duplicate_employee_day_keeps_first_row() {
        let doc = report_doc(&format!(
            "{}{}",
            data_row("2025-03-14", "1042", "Sara", &["08:05:00"]),
            data_row("2025-03-14", "1042", "Sara", &["09:30:00"]),
        ));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_in, "08:05:00");
    }

    #[test]
    fn test_same_employee_on_two_dates_keeps_both() {
        let doc = report_doc(&format!(
            "{}{}",
            data_row("2025-03-14", "1042", "Sara", &["08:05:00"]),
            data_row("2025-03-15", "1042", "Sara", &["08:10:00"]),
        ));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_empty_name_cell_is_preserved() {
        let doc = report_doc(&data_row("2025-03-14", "1042", "", &["08:05:00"]));
        let records = extract_records(&doc).unwrap();
        assert_eq!(records[0].employee_name, "");
    }

    #[test]
    fn test_bytes_entry_point_handles_windows_1252() {
        let mut raw = report_doc(&data_row("2025-03-14", "1042", "Ren?e", &["08:05:00"])).into_bytes();
        // swap the placeholder for 0xE9 ('e' acute in Windows-1252), which
        // makes the document invalid UTF-8 and exercises the fallback
        let at = raw.iter().position(|&b| b == b'?').unwrap();
        raw[at] = 0xE9;

        let records = extract_records_from_bytes(&raw).unwrap();
        assert_eq!(records[0].employee_name, "Ren\u{E9}e");
    }

    #[test]
    fn test_header_detection_is_case_insensitive() {
        let doc = "<table>\
             <tr><th>DATE</th><th>Id NUMBER</th><th>Name</th><th>P1</th><th>P2</th></tr>\
             <tr><td>2025-03-14</td><td>1</td><td>A</td><td>08:00:00</td><td>17:00:00</td></tr>\
             </table>";
        assert!(extract_records(doc).is_ok());
    }
}
