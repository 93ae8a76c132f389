//! # CLI Command Implementations
//!
//! The tool has a single command, kept in its own module the same way a
//! subcommand would be:
//! - An `Args` struct that defines the arguments, derived using `clap`.
//! - An `execute` function that runs the command and returns the exit code.

pub mod rewrite;
