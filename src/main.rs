//! # Doc Permalinks CLI
//!
//! This is the binary entry point for the `doc-permalinks` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the rewrite and turning its outcome into an exit code.
//!
//! The core logic lives in the `lib.rs` library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    std::process::exit(cli.execute());
}
