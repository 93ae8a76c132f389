//! CLI argument parsing and logging setup

use clap::Parser;

use crate::commands;

/// Rewrite `[label]: <path - term>` references into commit-pinned links
#[derive(Parser, Debug)]
#[command(name = "doc-permalinks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    rewrite: commands::rewrite::RewriteArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(self) -> i32 {
        init_logging(&self.log_level);
        commands::rewrite::execute(self.rewrite, &self.color)
    }
}

/// Log to stderr; `RUST_LOG` wins over `--log-level` when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}
