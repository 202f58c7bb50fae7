//! Import-only line filtering.

use crate::config::Config;
use crate::error::{PatchviewError, Result};
use crate::parse::{DiffLine, LineKind};
use regex::Regex;

/// Compiled import patterns for efficient matching.
///
/// This struct caches compiled regexes for reuse across every line of a
/// render. Create once per pipeline run.
pub struct CompiledImportPatterns {
    /// The compiled regex patterns paired with their original string representations.
    patterns: Vec<(Regex, String)>,
}

impl std::fmt::Debug for CompiledImportPatterns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledImportPatterns")
            .field(
                "patterns",
                &self.patterns.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl CompiledImportPatterns {
    /// Compile import patterns from config.
    ///
    /// # Returns
    ///
    /// * `Ok(CompiledImportPatterns)` - Successfully compiled patterns
    /// * `Err(PatchviewError::UserError)` - If any pattern fails to compile
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut patterns = Vec::with_capacity(config.import_patterns.len());

        for pattern_str in &config.import_patterns {
            let regex = Regex::new(pattern_str).map_err(|e| {
                PatchviewError::UserError(format!(
                    "invalid regex in import_patterns: '{}' - {}\n\
                     Fix: correct or remove this pattern in the config file.",
                    pattern_str, e
                ))
            })?;
            patterns.push((regex, pattern_str.clone()));
        }

        Ok(Self { patterns })
    }

    /// Check whether a line's content is import-only noise.
    ///
    /// The content is tested after trimming leading whitespace, so indented
    /// import statements are caught as well.
    pub fn is_import_line(&self, content: &str) -> bool {
        let trimmed = content.trim_start();
        self.patterns.iter().any(|(regex, _)| regex.is_match(trimmed))
    }
}

/// Drop add/del records whose content matches an import pattern.
///
/// Hunk and context records are never dropped by this pass.
pub(super) fn drop_import_lines(
    records: &[DiffLine],
    patterns: &CompiledImportPatterns,
) -> Vec<DiffLine> {
    records
        .iter()
        .filter(|record| match record.kind {
            LineKind::Add | LineKind::Del => !patterns.is_import_line(&record.text),
            LineKind::Hunk | LineKind::Ctx => true,
        })
        .cloned()
        .collect()
}
