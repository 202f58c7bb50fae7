//! Error types for the patchview CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for patchview operations.
///
/// The engine passes themselves are infallible: parsing, filtering, and move
/// detection degrade gracefully on malformed input. Errors only arise at the
/// edges, from user-supplied files, config, and payloads.
#[derive(Error, Debug)]
pub enum PatchviewError {
    /// User provided invalid arguments, an unreadable file, or invalid config.
    #[error("{0}")]
    UserError(String),

    /// The batch payload could not be read or is not a JSON object.
    #[error("Payload error: {0}")]
    PayloadError(String),
}

impl PatchviewError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PatchviewError::UserError(_) => exit_codes::USER_ERROR,
            PatchviewError::PayloadError(_) => exit_codes::PAYLOAD_ERROR,
        }
    }
}

/// Result type alias for patchview operations.
pub type Result<T> = std::result::Result<T, PatchviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PatchviewError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn payload_error_has_correct_exit_code() {
        let err = PatchviewError::PayloadError("not a JSON object".to_string());
        assert_eq!(err.exit_code(), exit_codes::PAYLOAD_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PatchviewError::UserError("failed to read patch file 'x.patch'".to_string());
        assert_eq!(err.to_string(), "failed to read patch file 'x.patch'");

        let err = PatchviewError::PayloadError("expected object at line 1".to_string());
        assert_eq!(err.to_string(), "Payload error: expected object at line 1");
    }
}
