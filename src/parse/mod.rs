//! Unified-diff tokenization for patchview.
//!
//! This module turns raw unified-diff text into an ordered sequence of typed
//! line records with running old/new line counters:
//! - File-header noise (`--- `, `+++ `, `diff `) is skipped entirely
//! - Hunk headers (`@@ -a,b +c,d @@`) reset the counters (best-effort)
//! - `+`/`-`/context lines become records carrying their line numbers
//!
//! The parsing is deterministic and tolerant: malformed hunk headers leave
//! the counters at their current values rather than failing.

mod helpers;
mod parser;
mod records;

#[cfg(test)]
mod tests;

// Re-export public API
pub use parser::parse_diff;
pub use records::{DiffInput, DiffLine, LineKind};
