//! Process exit codes.
//!
//! - `0`: every reference resolved
//! - `1`: some references failed to resolve, or the external repository
//!   could not be used
//! - `2`: invalid command-line usage (also what clap uses for bad flags)

use crate::error::{Error, ErrorTier};

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const USAGE: i32 = 2;

/// Exit code for a fatal error.
pub fn for_error(error: &Error) -> i32 {
    match error.tier() {
        ErrorTier::Usage => USAGE,
        ErrorTier::Configuration | ErrorTier::Reference => FAILURE,
    }
}
