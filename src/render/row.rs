//! Display row types.

use serde::{Deserialize, Serialize};

/// Display category for a rendered row.
///
/// Closed vocabulary: the display layer needs nothing but this category to
/// pick a visual treatment for the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowCategory {
    /// A hunk header row.
    Hunk,
    /// A plain added line.
    Add,
    /// A plain deleted line.
    Del,
    /// An unchanged context line.
    Ctx,
    /// An added line that is part of a relocated block, textually identical
    /// to its deleted counterpart.
    MovedAdd,
    /// An added line that is part of a relocated block but was edited.
    MovedAddEdited,
    /// A deleted line that is part of a relocated block, textually identical
    /// to its added counterpart.
    MovedDel,
    /// A deleted line that is part of a relocated block but was edited.
    MovedDelEdited,
}

impl RowCategory {
    /// Stable display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            RowCategory::Hunk => "hunk",
            RowCategory::Add => "add",
            RowCategory::Del => "del",
            RowCategory::Ctx => "ctx",
            RowCategory::MovedAdd => "moved-add",
            RowCategory::MovedAddEdited => "moved-add-edited",
            RowCategory::MovedDel => "moved-del",
            RowCategory::MovedDelEdited => "moved-del-edited",
        }
    }
}

/// One display row: the engine's final output unit.
///
/// Produced transiently for a single render call and handed to the display
/// layer; no cross-call state is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRow {
    /// The visual category of this row.
    pub category: RowCategory,
    /// Line number in the old file, where applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line_no: Option<usize>,
    /// Line number in the new file, where applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line_no: Option<usize>,
    /// The row text, HTML-escaped.
    pub escaped_text: String,
}
