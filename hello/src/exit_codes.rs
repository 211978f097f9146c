//! Stable exit codes for the `hello` binary.

/// All output was written and flushed.
pub const OK: i32 = 0;
/// Config could not be loaded or output could not be written.
pub const FAILURE: i32 = 1;
