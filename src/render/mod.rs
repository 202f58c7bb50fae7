//! Row rendering: the final stage of the annotation pipeline.
//!
//! Walks the tagged record stream and produces one display row per record,
//! HTML-escaping all text. The display layer only needs each row's category
//! (a closed vocabulary) to apply visual treatment; it needs no knowledge of
//! the parsing or matching internals.

mod escape;
mod renderer;
mod row;


// Re-export public API
pub use escape::escape_html;
pub use renderer::{annotate, RowSink, EMPTY_DIFF_NOTICE};
pub use row::{RenderRow, RowCategory};

pub(crate) use renderer::annotate_with_patterns;
