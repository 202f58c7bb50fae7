//! Command implementations for patchview.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod batch;
mod render;


use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Batch(args) => batch::cmd_batch(args),
    }
}
