//! The `batch` command: fan out over a keyed JSON diff payload.

use super::render::{load_config, write_rows};
use crate::batch::{BatchOrchestrator, DiffPayload};
use crate::cli::{BatchArgs, OutputFormat};
use crate::error::{PatchviewError, Result};
use crate::render::{RenderRow, RowSink};
use std::io::Write;

/// Sink that prints each rendered target as a keyed section on one writer.
pub(super) struct SectionPrinter<W: Write> {
    out: W,
    format: OutputFormat,
    error: Option<std::io::Error>,
}

impl<W: Write> SectionPrinter<W> {
    pub(super) fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// The first write error encountered, if any.
    pub(super) fn into_error(self) -> Option<std::io::Error> {
        self.error
    }
}

impl<W: Write> RowSink for SectionPrinter<W> {
    fn accept(&mut self, key: &str, rows: Vec<RenderRow>) {
        if self.error.is_some() {
            return;
        }

        let result = writeln!(self.out, "== {} ==", key)
            .and_then(|_| write_rows(&mut self.out, &rows, self.format));

        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

pub(super) fn cmd_batch(args: BatchArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let raw = std::fs::read_to_string(&args.payload).map_err(|e| {
        PatchviewError::PayloadError(format!(
            "failed to read payload file '{}': {}",
            args.payload.display(),
            e
        ))
    })?;

    let payload = match DiffPayload::from_json(&raw) {
        Ok(payload) => payload,
        Err(err) => {
            // A malformed payload disables auto-rendering but is not fatal;
            // individual targets can still be rendered via `render`.
            eprintln!("Warning: {}", err);
            return Ok(());
        }
    };

    let mut orchestrator = BatchOrchestrator::new(payload);
    if args.keys.is_empty() {
        orchestrator.register_all();
    } else {
        for key in &args.keys {
            orchestrator.register(key.clone());
        }
    }

    let stdout = std::io::stdout();
    let mut printer = SectionPrinter::new(stdout.lock(), args.format);
    orchestrator.run(&config, &mut printer)?;

    if let Some(e) = printer.into_error() {
        return Err(PatchviewError::UserError(format!(
            "failed to write output: {}",
            e
        )));
    }

    Ok(())
}
