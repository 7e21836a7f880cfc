//! Minimal tolerant HTML scanning.
//!
//! Just enough HTML handling to read a machine-generated report table:
//! case-insensitive tag detection, attribute-blind block matching, tag
//! stripping, entity decoding for the common entities, and whitespace
//! normalization. Attribute order, unclosed rows, and markup noise are
//! tolerated; this is not, and does not need to be, a conforming parser.

use std::borrow::Cow;

/// True when `doc[at..]` starts with `pattern`, ASCII case-insensitively.
fn matches_at(doc: &[u8], at: usize, pattern: &[u8]) -> bool {
    doc.len() >= at + pattern.len()
        && doc[at..at + pattern.len()]
            .iter()
            .zip(pattern)
            .all(|(b, p)| b.to_ascii_lowercase() == *p)
}

/// Finds `<name` at or after `from`, requiring the name to end at a
/// whitespace, `>`, or `/` boundary so `<tr` does not match `<track>`.
fn find_open_tag(doc: &str, name: &str, from: usize) -> Option<usize> {
    find_tag(doc, name, from, false)
}

/// Finds `</name` at or after `from`, with the same boundary rule.
fn find_close_tag(doc: &str, name: &str, from: usize) -> Option<usize> {
    find_tag(doc, name, from, true)
}

fn find_tag(doc: &str, name: &str, from: usize, closing: bool) -> Option<usize> {
    let bytes = doc.as_bytes();
    let mut pattern = Vec::with_capacity(name.len() + 2);
    pattern.push(b'<');
    if closing {
        pattern.push(b'/');
    }
    pattern.extend(name.bytes().map(|b| b.to_ascii_lowercase()));

    let mut at = from;
    while at + pattern.len() <= bytes.len() {
        if matches_at(bytes, at, &pattern) {
            match bytes.get(at + pattern.len()) {
                None => return Some(at),
                Some(&next) if next.is_ascii_whitespace() || next == b'>' || next == b'/' => {
                    return Some(at);
                }
                _ => {}
            }
        }
        at += 1;
    }
    None
}

/// Position just past the `>` of the tag starting at `open`, or the end of
/// the document for a truncated tag.
fn after_tag(doc: &str, open: usize) -> usize {
    doc[open..]
        .find('>')
        .map(|i| open + i + 1)
        .unwrap_or(doc.len())
}

/// Removes `<!-- -->` comments so commented-out markup is not scanned.
pub(crate) fn strip_comments(doc: &str) -> Cow<'_, str> {
    if !doc.contains("<!--") {
        return Cow::Borrowed(doc);
    }
    let mut out = String::with_capacity(doc.len());
    let mut rest = doc;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        rest = match rest[start..].find("-->") {
            Some(end) => &rest[start + end + 3..],
            None => "",
        };
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Returns the inner content of every `<table>` block in document order.
///
/// Matching is depth-aware, so a wrapper table is listed before the tables
/// it contains and each block runs to its own `</table>`. An unclosed
/// table runs to the end of the document.
pub(crate) fn table_blocks(doc: &str) -> Vec<&str> {
    let mut tables = Vec::new();
    let mut pos = 0;
    while let Some(open) = find_open_tag(doc, "table", pos) {
        let content_start = after_tag(doc, open);
        let mut depth = 1usize;
        let mut cursor = content_start;
        let mut content_end = doc.len();
        while depth > 0 {
            let next_open = find_open_tag(doc, "table", cursor);
            let next_close = find_close_tag(doc, "table", cursor);
            match (next_open, next_close) {
                (Some(o), Some(c)) if o < c => {
                    depth += 1;
                    cursor = after_tag(doc, o);
                }
                (_, Some(c)) => {
                    depth -= 1;
                    if depth == 0 {
                        content_end = c;
                    }
                    cursor = after_tag(doc, c);
                }
                (_, None) => break,
            }
        }
        tables.push(&doc[content_start..content_end]);
        // resume just inside this table so nested tables are found next
        pos = content_start;
    }
    tables
}

/// Splits a table block into row contents.
///
/// A row runs from past its `<tr>` to the matching `</tr>`, or to the next
/// `<tr>` when the export omits closing tags.
pub(crate) fn rows(table: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(open) = find_open_tag(table, "tr", pos) {
        let content_start = after_tag(table, open);
        let next_open = find_open_tag(table, "tr", content_start);
        let next_close = find_close_tag(table, "tr", content_start);
        let content_end = match (next_open, next_close) {
            (Some(o), Some(c)) => o.min(c),
            (Some(o), None) => o,
            (None, Some(c)) => c,
            (None, None) => table.len(),
        };
        out.push(&table[content_start..content_end]);
        pos = content_end.max(content_start);
    }
    out
}

/// Extracts the trimmed text of each `<td>` cell in a row.
///
/// Only `<td>` counts: header rows built from `<th>` yield no cells and
/// are filtered out upstream by the cell-count check.
pub(crate) fn cells(row: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(open) = find_open_tag(row, "td", pos) {
        let content_start = after_tag(row, open);
        let next_open = find_open_tag(row, "td", content_start);
        let next_close = find_close_tag(row, "td", content_start);
        let content_end = match (next_open, next_close) {
            (Some(o), Some(c)) => o.min(c),
            (Some(o), None) => o,
            (None, Some(c)) => c,
            (None, None) => row.len(),
        };
        out.push(visible_text(&row[content_start..content_end]));
        pos = content_end.max(content_start);
    }
    out
}

/// Visible text of a markup fragment: tags stripped, entities decoded,
/// whitespace runs collapsed to single spaces, ends trimmed.
pub(crate) fn visible_text(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut chars = fragment.char_indices();
    let mut pending_space = false;
    while let Some((i, ch)) = chars.next() {
        match ch {
            '<' => {
                // skip to the end of the tag
                while let Some((_, c)) = chars.next() {
                    if c == '>' {
                        break;
                    }
                }
            }
            '&' => {
                let (entity, consumed) = decode_entity(&fragment[i..]);
                for _ in 0..consumed.saturating_sub(1) {
                    chars.next();
                }
                match entity {
                    Some(c) if c.is_whitespace() => pending_space = !out.is_empty(),
                    Some(c) => {
                        if pending_space {
                            out.push(' ');
                            pending_space = false;
                        }
                        out.push(c);
                    }
                    None => {
                        if pending_space {
                            out.push(' ');
                            pending_space = false;
                        }
                        out.push('&');
                    }
                }
            }
            c if c.is_whitespace() => pending_space = !out.is_empty(),
            c => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(c);
            }
        }
    }
    out
}

/// Decodes the entity at the start of `text` (which begins with `&`).
///
/// Returns the decoded character and how many input chars it spans, or
/// `(None, 1)` for anything unrecognised, which is then kept literally.
fn decode_entity(text: &str) -> (Option<char>, usize) {
    let end = match text[1..].find(';') {
        // entities are short; a distant semicolon means a bare ampersand
        Some(i) if i <= 8 => i + 1,
        _ => return (None, 1),
    };
    let name = &text[1..end];
    let decoded = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{A0}'),
        _ => {
            let code = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()));
            code.and_then(char::from_u32)
        }
    };
    match decoded {
        Some(c) => (Some(c), end + 1),
        None => (None, 1),
    }
}
