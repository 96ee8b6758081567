pub mod analyzer;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod fault;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod syntax;

pub use error::{Result, ZiglintError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FATAL: i32 = 2;

/// Exit code for a completed run: the number of error-severity faults,
/// saturated to stay inside the 8-bit exit status range.
#[must_use]
pub fn exit_code_for(error_count: usize) -> i32 {
    i32::try_from(error_count).map_or(255, |n| n.min(255))
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
