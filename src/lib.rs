//! Patchview: diff-analysis and rendering engine.
//!
//! Consumes already-computed unified-diff text, drops low-signal noise
//! (import-only lines, whitespace-only reformatting), tags relocated code
//! blocks as moved, and emits an annotated row sequence for a display layer.
//!
//! Data flows strictly [`parse`] -> [`filter`] -> [`moves`] -> [`render`],
//! with [`batch`] as the only caller that fans out over multiple
//! (target, diff) pairs.
//!
//! ```
//! use patchview::config::Config;
//! use patchview::parse::DiffInput;
//! use patchview::render::annotate;
//!
//! let input = DiffInput::from("@@ -1,1 +1,1 @@\n-old\n+new");
//! let rows = annotate(&input, &Config::default()).unwrap();
//! assert_eq!(rows.len(), 3); // hunk header, deletion, addition
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod moves;
pub mod parse;
pub mod render;
