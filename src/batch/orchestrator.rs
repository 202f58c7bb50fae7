//! Fan-out rendering over registered placeholder targets.

use super::payload::DiffPayload;
use crate::config::Config;
use crate::error::Result;
use crate::filter::CompiledImportPatterns;
use crate::render::{annotate_with_patterns, RowSink};
use std::collections::HashSet;

/// Renders each registered target key against a keyed diff payload.
///
/// Construction takes the payload; targets are registered explicitly by key.
/// [`run`](Self::run) then renders every registered key present in the
/// payload exactly once, in registration order, delivering the rows to the
/// supplied sink. Per-target renders share no mutable state, so the order
/// does not affect any individual result.
pub struct BatchOrchestrator {
    payload: DiffPayload,
    targets: Vec<String>,
}

impl BatchOrchestrator {
    /// Create an orchestrator over a parsed payload.
    pub fn new(payload: DiffPayload) -> Self {
        Self {
            payload,
            targets: Vec::new(),
        }
    }

    /// Register a placeholder target by payload key.
    ///
    /// Keys absent from the payload are left untouched by `run`: no rows,
    /// no error. Registering the same key twice still renders it only once.
    pub fn register(&mut self, key: impl Into<String>) {
        self.targets.push(key.into());
    }

    /// Register every payload key as a target, in sorted key order.
    pub fn register_all(&mut self) {
        let keys: Vec<String> = self.payload.keys().map(str::to_string).collect();
        self.targets.extend(keys);
    }

    /// Render every registered target whose key exists in the payload.
    ///
    /// Registered targets are consumed: a second `run` renders nothing, so a
    /// target can never receive duplicate rows for one payload.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of renders performed
    /// * `Err(PatchviewError::UserError)` - An import pattern failed to compile
    pub fn run(&mut self, config: &Config, sink: &mut dyn RowSink) -> Result<usize> {
        let patterns = CompiledImportPatterns::from_config(config)?;

        let mut rendered_keys: HashSet<String> = HashSet::new();
        let mut rendered = 0;

        for key in self.targets.drain(..) {
            if rendered_keys.contains(&key) {
                continue;
            }

            if let Some(input) = self.payload.get(&key) {
                sink.accept(&key, annotate_with_patterns(input, config, &patterns));
                rendered_keys.insert(key);
                rendered += 1;
            }
        }

        Ok(rendered)
    }
}
