//! Exit codes of the `patnum` binary. Part of its public contract.

pub const SUCCESS: i32 = 0;
pub const INVALID: i32 = 1; // Number failed validation
pub const INTERNAL_ERROR: i32 = 2; // I/O failure; clap also exits 2 on usage errors
