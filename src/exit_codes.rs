//! Exit code constants for the patchview CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, invalid config)
//! - 2: Payload error (batch payload unreadable)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable patch or config file, invalid config values.
pub const USER_ERROR: i32 = 1;

/// Payload error: the batch payload file could not be read.
pub const PAYLOAD_ERROR: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PAYLOAD_ERROR];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
