//! Exit code constants for the stylecfg CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable file)
//! - 2: Parse failure (malformed source)
//! - 3: Validation failure (semantically invalid value)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or I/O failure.
pub const USER_ERROR: i32 = 1;

/// The source document is not a well-formed nested key/value structure.
pub const PARSE_FAILURE: i32 = 2;

/// A value failed validation: bad hex code, dangling keyframe reference, etc.
pub const VALIDATION_FAILURE: i32 = 3;
