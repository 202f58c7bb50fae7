//! Record types produced by the diff parser.

use serde::{Deserialize, Serialize};

/// Raw diff input: either a full patch string or pre-split lines.
///
/// The batch payload accepts both forms, so this deserializes untagged from
/// either a JSON string or a JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiffInput {
    /// A raw patch string, split on newlines during parsing.
    Text(String),
    /// Pre-split lines, consumed as-is.
    Lines(Vec<String>),
}

impl DiffInput {
    /// The input as a list of lines, without allocating new line strings.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            DiffInput::Text(text) => text.lines().collect(),
            DiffInput::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// Whether the input carries no lines at all.
    ///
    /// An empty input triggers the renderer's explicit empty-state row.
    pub fn is_empty(&self) -> bool {
        match self {
            DiffInput::Text(text) => text.is_empty(),
            DiffInput::Lines(lines) => lines.is_empty(),
        }
    }
}

impl From<&str> for DiffInput {
    fn from(text: &str) -> Self {
        DiffInput::Text(text.to_string())
    }
}

impl From<String> for DiffInput {
    fn from(text: String) -> Self {
        DiffInput::Text(text)
    }
}

impl From<Vec<String>> for DiffInput {
    fn from(lines: Vec<String>) -> Self {
        DiffInput::Lines(lines)
    }
}

/// Classification of a single parsed diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A hunk header (`@@ ... @@`).
    Hunk,
    /// An added line (`+` prefix).
    Add,
    /// A deleted line (`-` prefix).
    Del,
    /// A context line (space prefix or no prefix).
    Ctx,
}

/// A single typed record in the parsed diff stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// The record classification.
    pub kind: LineKind,
    /// Line content with the diff marker stripped (raw header text for hunks).
    pub text: String,
    /// Line number in the old file (del and ctx records, 1-based).
    pub old_line_no: Option<usize>,
    /// Line number in the new file (add and ctx records, 1-based).
    pub new_line_no: Option<usize>,
    /// True when the immediately preceding record in the raw stream has the
    /// same add/del kind. Used to grow contiguous blocks during move detection.
    pub consecutive: bool,
    /// Stable position in the pre-filter stream. Correlates deletions and
    /// additions after filtering has dropped records.
    pub index: usize,
}
