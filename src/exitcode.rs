//! Process exit codes

/// Successful termination (also used for `--help`)
pub const OK: i32 = 0;

/// Any failure: usage, missing dependency, external command, output
pub const FAILURE: i32 = 1;
