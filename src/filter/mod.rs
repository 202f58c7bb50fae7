//! Noise filtering for parsed diff streams.
//!
//! Two passes over the parsed sequence, preserving relative order:
//! - Import pass: drop add/del records that are import-only lines
//! - Whitespace pass: collapse aligned del/add runs that differ only in
//!   whitespace into context records
//!
//! Both passes annotate or drop records; neither mutates line text. Dropping
//! an import line can make a del run and an add run adjacent, which the
//! whitespace pass then sees as a single candidate run.

mod imports;
mod whitespace;


// Re-export public API
pub use imports::CompiledImportPatterns;

use crate::parse::DiffLine;

/// Run both noise passes over a parsed record stream.
///
/// Returns a possibly-shorter sequence; hunk and context records are never
/// dropped.
pub fn filter_noise(records: &[DiffLine], patterns: &CompiledImportPatterns) -> Vec<DiffLine> {
    let without_imports = imports::drop_import_lines(records, patterns);
    whitespace::collapse_whitespace_pairs(&without_imports)
}
