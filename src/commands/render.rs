//! The `render` command: annotate one patch file and print its rows.

use crate::cli::{OutputFormat, RenderArgs};
use crate::config::Config;
use crate::error::{PatchviewError, Result};
use crate::parse::DiffInput;
use crate::render::{annotate, RenderRow};
use std::io::Write;
use std::path::Path;

pub(super) fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let text = std::fs::read_to_string(&args.patch).map_err(|e| {
        PatchviewError::UserError(format!(
            "failed to read patch file '{}': {}",
            args.patch.display(),
            e
        ))
    })?;

    let rows = annotate(&DiffInput::Text(text), &config)?;

    let stdout = std::io::stdout();
    write_rows(&mut stdout.lock(), &rows, args.format)
        .map_err(|e| PatchviewError::UserError(format!("failed to write output: {}", e)))
}

/// Load the config file when given, else fall back to defaults.
pub(super) fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// Write rows in the requested format.
pub(super) fn write_rows(
    out: &mut dyn Write,
    rows: &[RenderRow],
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows).map_err(std::io::Error::other)?;
            writeln!(out)
        }
        OutputFormat::Text => {
            for row in rows {
                writeln!(
                    out,
                    "{:<16} {:>5} {:>5}  {}",
                    row.category.label(),
                    fmt_line_no(row.old_line_no),
                    fmt_line_no(row.new_line_no),
                    row.escaped_text
                )?;
            }
            Ok(())
        }
    }
}

fn fmt_line_no(line_no: Option<usize>) -> String {
    line_no.map(|n| n.to_string()).unwrap_or_default()
}
