//! Byte decoding for uploaded reports.
//!
//! Legacy Windows-locale biometric terminals emit exports that are not
//! valid UTF-8. The decoder tries UTF-8 first and falls back to decoding
//! the same bytes as Windows-1252, replacing the five code points that page
//! leaves undefined rather than raising.

use std::borrow::Cow;

/// Windows-1252 mappings for the 0x80..=0x9F range. The five undefined
/// positions (0x81, 0x8D, 0x8F, 0x90, 0x9D) decode to U+FFFD.
const CP1252_C1: [char; 32] = [
    '\u{20AC}', '\u{FFFD}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{FFFD}', '\u{017D}', '\u{FFFD}',
    '\u{FFFD}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{FFFD}', '\u{017E}', '\u{0178}',
];

/// Decodes an uploaded report to text.
///
/// Valid UTF-8 input is borrowed as-is. Anything else is re-decoded as
/// Windows-1252, which never fails: every byte maps to a character, with
/// the page's undefined positions replaced by U+FFFD.
///
/// # Example
///
/// ```
/// use payroll_engine::extract::decode_report_bytes;
///
/// assert_eq!(decode_report_bytes(b"<table>"), "<table>");
/// // 0xE9 is 'e' acute in Windows-1252 but invalid UTF-8
/// assert_eq!(decode_report_bytes(b"Ren\xE9e"), "Ren\u{E9}e");
/// ```
pub fn decode_report_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(decode_windows_1252(bytes)),
    }
}

fn decode_windows_1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => CP1252_C1[(b - 0x80) as usize],
            // 0x00..=0x7F and 0xA0..=0xFF coincide with Unicode
            _ => char::from(b),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_is_borrowed() {
        let decoded = decode_report_bytes("طاولة الحضور".as_bytes());
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "طاولة الحضور");
    }

    #[test]
    fn test_latin1_range_falls_back() {
        // 0xC9 is invalid as a standalone UTF-8 byte
        let decoded = decode_report_bytes(b"\xC9tienne");
        assert!(matches!(decoded, Cow::Owned(_)));
        assert_eq!(decoded, "\u{C9}tienne");
    }

    #[test]
    fn test_c1_range_uses_windows_1252_mappings() {
        assert_eq!(decode_report_bytes(b"\x80"), "\u{20AC}");
        assert_eq!(decode_report_bytes(b"\x93quoted\x94"), "\u{201C}quoted\u{201D}");
    }

    #[test]
    fn test_undefined_positions_are_replaced_not_raised() {
        assert_eq!(decode_report_bytes(b"a\x81b\x8Dc"), "a\u{FFFD}b\u{FFFD}c");
    }

    #[test]
    fn test_ascii_survives_the_fallback_unchanged() {
        let decoded = decode_report_bytes(b"<td>08:05:00</td>\xFF");
        assert!(decoded.starts_with("<td>08:05:00</td>"));
    }
}
