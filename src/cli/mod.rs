//! CLI argument parsing for patchview.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Patchview: annotated unified-diff rows for display layers.
///
/// Parses unified-diff text, drops low-signal noise (import-only lines,
/// whitespace-only reformatting), tags relocated blocks as moved code, and
/// emits one display row per surviving line.
#[derive(Parser, Debug)]
#[command(name = "patchview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for patchview.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Annotate a single unified-diff file and print its rows.
    Render(RenderArgs),

    /// Render entries of a keyed JSON diff payload.
    ///
    /// Renders each requested key present in the payload; keys listed but
    /// absent from the payload are skipped silently. A payload path that
    /// cannot be read is an error (exit 2); a payload that reads but is not
    /// valid JSON only logs a warning and renders nothing.
    Batch(BatchArgs),
}

/// Output format for rendered rows.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One aligned line per row: category, line numbers, text.
    #[default]
    Text,
    /// The row sequence as a JSON array.
    Json,
}

/// Arguments for the `render` command.
#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Path to the unified-diff patch file.
    pub patch: PathBuf,

    /// Output format for the rows.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Optional YAML config overriding engine defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `batch` command.
#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    /// Path to the JSON payload mapping keys to diff inputs.
    pub payload: PathBuf,

    /// Placeholder keys to render (defaults to every payload key).
    pub keys: Vec<String>,

    /// Output format for the rows.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Optional YAML config overriding engine defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["patchview", "render", "changes.patch"]).unwrap();
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.patch, PathBuf::from("changes.patch"));
                assert_eq!(args.format, OutputFormat::Text);
                assert!(args.config.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn batch_parses_keys_and_format() {
        let cli = Cli::try_parse_from([
            "patchview",
            "batch",
            "payload.json",
            "key-a",
            "key-b",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Command::Batch(args) => {
                assert_eq!(args.payload, PathBuf::from("payload.json"));
                assert_eq!(args.keys, vec!["key-a", "key-b"]);
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["patchview"]).is_err());
    }
}
