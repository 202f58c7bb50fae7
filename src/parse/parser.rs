//! Core diff tokenization logic.

use super::helpers::parse_hunk_header;
use super::records::{DiffInput, DiffLine, LineKind};

/// Tokenize unified-diff input into an ordered record stream.
///
/// A small finite-state walk over the lines with accumulator state: the
/// running `old_line`/`new_line` counters and the kind of the previously
/// emitted record (for the `consecutive` flag).
///
/// File-header lines (`--- `, `+++ `, `diff `) are recognized as noise and
/// skipped without emitting a record; they do not reset the counters. Hunk
/// headers always emit a record carrying the raw header text, but reset the
/// counters only when they parse. Within a hunk, emitted line numbers are
/// non-decreasing by construction.
pub fn parse_diff(input: &DiffInput) -> Vec<DiffLine> {
    let mut records: Vec<DiffLine> = Vec::new();
    let mut old_line: usize = 0;
    let mut new_line: usize = 0;
    let mut last_kind: Option<LineKind> = None;

    for line in input.lines() {
        // File-header noise: skipped, counters untouched
        if line.starts_with("--- ") || line.starts_with("+++ ") || line.starts_with("diff ") {
            continue;
        }

        let index = records.len();

        if line.starts_with("@@") {
            // Malformed headers are tolerated: the counters simply keep
            // their current values (best-effort, non-fatal).
            if let Some((old_start, new_start)) = parse_hunk_header(line) {
                old_line = old_start;
                new_line = new_start;
            }
            records.push(DiffLine {
                kind: LineKind::Hunk,
                text: line.to_string(),
                old_line_no: None,
                new_line_no: None,
                consecutive: false,
                index,
            });
            last_kind = Some(LineKind::Hunk);
            continue;
        }

        let record = if let Some(content) = line.strip_prefix('+') {
            let record = DiffLine {
                kind: LineKind::Add,
                text: content.to_string(),
                old_line_no: None,
                new_line_no: Some(new_line),
                consecutive: last_kind == Some(LineKind::Add),
                index,
            };
            new_line += 1;
            record
        } else if let Some(content) = line.strip_prefix('-') {
            let record = DiffLine {
                kind: LineKind::Del,
                text: content.to_string(),
                old_line_no: Some(old_line),
                new_line_no: None,
                consecutive: last_kind == Some(LineKind::Del),
                index,
            };
            old_line += 1;
            record
        } else {
            // Context consumes both counters. Strip the single space marker
            // when present so the text matches the file content.
            let content = line.strip_prefix(' ').unwrap_or(line);
            let record = DiffLine {
                kind: LineKind::Ctx,
                text: content.to_string(),
                old_line_no: Some(old_line),
                new_line_no: Some(new_line),
                consecutive: false,
                index,
            };
            old_line += 1;
            new_line += 1;
            record
        };

        last_kind = Some(record.kind);
        records.push(record);
    }

    records
}
