//! Engine configuration for patchview.
//!
//! Holds the noise-filter pattern set and the move-detection thresholds.
//! Supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

#[cfg(test)]
mod tests;

use crate::error::{PatchviewError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_import_patterns() -> Vec<String> {
    vec![
        r"^import ".to_string(),
        r"^import\{".to_string(),
        r"^\} from ".to_string(),
    ]
}

fn default_match_window() -> usize {
    40
}

fn default_min_block_len() -> usize {
    3
}

fn default_min_match_lines() -> usize {
    3
}

fn default_similarity_threshold() -> f64 {
    0.7
}

/// Configuration for the annotation pipeline.
///
/// The defaults reproduce the stock behavior; a YAML file can override
/// individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Regex patterns marking an added/deleted line as import-only noise.
    ///
    /// Matched against the line content after stripping the diff marker and
    /// leading whitespace. Matching lines are dropped from the stream.
    #[serde(default = "default_import_patterns")]
    pub import_patterns: Vec<String>,

    /// Maximum records a candidate moved block may span.
    #[serde(default = "default_match_window")]
    pub match_window: usize,

    /// Minimum lines for a block to be considered for move detection.
    #[serde(default = "default_min_block_len")]
    pub min_block_len: usize,

    /// Minimum matching lines required to accept a block pair.
    #[serde(default = "default_min_match_lines")]
    pub min_match_lines: usize,

    /// Required fraction of matching lines over the overlapping length.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            import_patterns: default_import_patterns(),
            match_window: default_match_window(),
            min_block_len: default_min_block_len(),
            min_match_lines: default_min_match_lines(),
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PatchviewError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PatchviewError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PatchviewError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `min_block_len` and `min_match_lines` must be positive
    /// - `match_window` must accommodate `min_block_len`
    /// - `similarity_threshold` must be in (0, 1]
    ///
    /// Import pattern regexes are compiled (and rejected) separately when the
    /// filter builds its compiled pattern set.
    pub fn validate(&self) -> Result<()> {
        if self.min_block_len == 0 {
            return Err(PatchviewError::UserError(
                "min_block_len must be positive".to_string(),
            ));
        }

        if self.min_match_lines == 0 {
            return Err(PatchviewError::UserError(
                "min_match_lines must be positive".to_string(),
            ));
        }

        if self.match_window < self.min_block_len {
            return Err(PatchviewError::UserError(format!(
                "match_window ({}) must be at least min_block_len ({})",
                self.match_window, self.min_block_len
            )));
        }

        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(PatchviewError::UserError(format!(
                "similarity_threshold must be in (0, 1], got {}",
                self.similarity_threshold
            )));
        }

        Ok(())
    }
}
