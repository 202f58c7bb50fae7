//! The annotation pipeline: parse, filter, detect moves, emit rows.

use super::escape::escape_html;
use super::row::{RenderRow, RowCategory};
use crate::config::Config;
use crate::error::Result;
use crate::filter::{filter_noise, CompiledImportPatterns};
use crate::moves::{detect_moves, MoveMarks, MoveMatch};
use crate::parse::{parse_diff, DiffInput, DiffLine, LineKind};

/// Text of the single informational row emitted for empty input.
pub const EMPTY_DIFF_NOTICE: &str = "no diff content to display";

/// The seam to the display layer: receives the finished rows for one target.
///
/// Targets are identified by their payload key; the engine never resolves
/// display elements itself.
pub trait RowSink {
    /// Deliver the rendered rows for `key`.
    fn accept(&mut self, key: &str, rows: Vec<RenderRow>);
}

/// Run the full pipeline over one diff input.
///
/// Compiles the configured import patterns, then parses, filters, tags moved
/// blocks, and maps every surviving record to a [`RenderRow`].
///
/// Empty or absent input produces exactly one informational context row -
/// an explicit empty-state contract, never a blank render and never an error.
///
/// # Returns
///
/// * `Ok(Vec<RenderRow>)` - The ordered rows for display
/// * `Err(PatchviewError::UserError)` - An import pattern failed to compile
pub fn annotate(input: &DiffInput, config: &Config) -> Result<Vec<RenderRow>> {
    let patterns = CompiledImportPatterns::from_config(config)?;
    Ok(annotate_with_patterns(input, config, &patterns))
}

/// Pipeline body, reusing an already-compiled pattern set.
///
/// The batch orchestrator compiles the patterns once and calls this per
/// (target, diff) pair.
pub(crate) fn annotate_with_patterns(
    input: &DiffInput,
    config: &Config,
    patterns: &CompiledImportPatterns,
) -> Vec<RenderRow> {
    if input.is_empty() {
        return vec![RenderRow {
            category: RowCategory::Ctx,
            old_line_no: None,
            new_line_no: None,
            escaped_text: escape_html(EMPTY_DIFF_NOTICE),
        }];
    }

    let parsed = parse_diff(input);
    let filtered = filter_noise(&parsed, patterns);
    let marks = detect_moves(&filtered, config);

    filtered
        .iter()
        .map(|record| to_row(record, &marks))
        .collect()
}

/// Map one tagged record to its display row.
fn to_row(record: &DiffLine, marks: &MoveMarks) -> RenderRow {
    let category = match record.kind {
        LineKind::Hunk => RowCategory::Hunk,
        LineKind::Ctx => RowCategory::Ctx,
        LineKind::Add => match marks.for_record(record) {
            Some(MoveMatch { exact: true }) => RowCategory::MovedAdd,
            Some(MoveMatch { exact: false }) => RowCategory::MovedAddEdited,
            None => RowCategory::Add,
        },
        LineKind::Del => match marks.for_record(record) {
            Some(MoveMatch { exact: true }) => RowCategory::MovedDel,
            Some(MoveMatch { exact: false }) => RowCategory::MovedDelEdited,
            None => RowCategory::Del,
        },
    };

    RenderRow {
        category,
        old_line_no: record.old_line_no,
        new_line_no: record.new_line_no,
        escaped_text: escape_html(&record.text),
    }
}
