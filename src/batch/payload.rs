//! Keyed diff payload parsing.

use crate::error::{PatchviewError, Result};
use crate::parse::DiffInput;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A keyed diff payload: opaque identifiers mapped to diff inputs.
///
/// The JSON form is a single object whose values are either raw patch
/// strings or arrays of pre-split lines:
///
/// ```json
/// {
///   "src-lib-rs": "@@ -1,1 +1,1 @@\n-old\n+new",
///   "src-main-rs": ["@@ -1,0 +1,1 @@", "+fn main() {}"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffPayload {
    entries: BTreeMap<String, DiffInput>,
}

impl DiffPayload {
    /// Parse a payload from a JSON string.
    ///
    /// # Returns
    ///
    /// * `Ok(DiffPayload)` - Parsed payload (possibly empty)
    /// * `Err(PatchviewError::PayloadError)` - Not valid JSON or not an object
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            PatchviewError::PayloadError(format!("payload is not a valid JSON object: {}", e))
        })
    }

    /// Look up the diff input for a key.
    pub fn get(&self, key: &str) -> Option<&DiffInput> {
        self.entries.get(key)
    }

    /// Iterate over the payload keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries in the payload.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the payload carries no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, replacing any existing input for the key.
    pub fn insert(&mut self, key: impl Into<String>, input: impl Into<DiffInput>) {
        self.entries.insert(key.into(), input.into());
    }
}
