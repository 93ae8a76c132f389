//! # Rewrite Command Implementation
//!
//! Locates the external repository, selects the documents matching the glob,
//! rewrites their references, and reports anything that did not resolve.
//!
//! ## Modes
//!
//! - **Dry run** (default): each rewritten document is printed to stdout and
//!   no file is touched.
//! - **Write**: enabled by a second positional argument (any value) or
//!   `--write`. Documents are overwritten in place and stdout stays quiet.
//!
//! Startup problems (no repository, no commit, bad or empty glob) abort before
//! any document is read. Unresolved references never abort; they are listed at
//! the end and the process exits with status 1.

use std::io;
use std::path::PathBuf;

use clap::Args;
use log::info;

use doc_permalinks::error::Result;
use doc_permalinks::exit_codes;
use doc_permalinks::link::LinkTarget;
use doc_permalinks::output::{emoji, OutputConfig};
use doc_permalinks::report::{process_documents, FailureReport, Mode};
use doc_permalinks::repository::{RepositoryConfig, RepositoryContext};
use doc_permalinks::selection::select_files;
use doc_permalinks::suggestions;

/// Arguments for rewriting documentation references
#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Glob selecting the documentation files to process (quote it).
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Any value here enables write mode; the value itself is ignored.
    #[arg(value_name = "WRITE", allow_hyphen_values = true)]
    pub write_positional: Option<String>,

    /// Overwrite the documents in place instead of printing them.
    #[arg(short, long)]
    pub write: bool,

    /// Directory of the external repository, checked before the defaults.
    #[arg(long, value_name = "DIR", env = "DOC_PERMALINKS_REPO")]
    pub repo: Option<PathBuf>,
}

impl RewriteArgs {
    fn mode(&self) -> Mode {
        if self.write || self.write_positional.is_some() {
            Mode::Write
        } else {
            Mode::DryRun
        }
    }

    fn repository_config(&self) -> RepositoryConfig {
        let config = RepositoryConfig::default();
        match &self.repo {
            Some(dir) => config.with_preferred(dir),
            None => config,
        }
    }
}

/// Execute the rewrite and return the process exit code.
pub fn execute(args: RewriteArgs, color_flag: &str) -> i32 {
    let out = OutputConfig::from_env_and_flag(color_flag);

    match run(&args) {
        Ok(report) if report.is_empty() => exit_codes::SUCCESS,
        Ok(report) => {
            eprint!("{}", report.render(&out));
            exit_codes::FAILURE
        }
        Err(e) => {
            let code = exit_codes::for_error(&e);
            eprintln!("{} {}", emoji(&out, "❌", "Error:"), suggestions::explain(e));
            code
        }
    }
}

fn run(args: &RewriteArgs) -> Result<FailureReport> {
    // The pattern is checked first so a bare invocation never touches disk.
    if args.pattern.as_deref().is_none_or(str::is_empty) {
        return Err(doc_permalinks::error::Error::MissingPattern);
    }

    let ctx = RepositoryContext::discover(&args.repository_config(), LinkTarget::default())?;
    let files = select_files(args.pattern.as_deref())?;
    let mode = args.mode();
    info!("{} file(s) selected, mode {:?}", files.len(), mode);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    process_documents(&ctx, &files, mode, &mut handle)
}
