//! # Error Handling
//!
//! This module defines the centralized error type for `doc-permalinks`. It
//! uses `thiserror` to derive an `Error` enum covering every failure the
//! pipeline can hit.
//!
//! Errors fall into three tiers, reported by [`Error::tier`]:
//!
//! - **Configuration**: the external repository or its commit cannot be
//!   determined. Fatal; the run aborts before any document is touched.
//! - **Usage**: the file pattern is missing, malformed, or matches nothing.
//!   Fatal as well.
//! - **Reference**: a single reference could not be resolved. These are
//!   recorded and the run continues.
//!
//! `Io` and `Regex` are plumbing errors (reading or writing a document,
//! compiling a pattern) and are treated as configuration-tier failures.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for doc-permalinks operations
#[derive(Error, Debug)]
pub enum Error {
    /// None of the candidate directories contains the marker file.
    #[error("Could not find the external repository: none of [{}] contains {marker}", display_paths(candidates))]
    RepositoryNotFound {
        candidates: Vec<PathBuf>,
        marker: String,
    },

    /// `git rev-parse` failed or produced no output.
    #[error("Could not get the commit of {}: {message}", root.display())]
    CommitUnavailable { root: PathBuf, message: String },

    /// No file pattern was given on the command line.
    #[error("Did not include a glob for documentation files to change")]
    MissingPattern,

    /// The file pattern is valid but matched no files.
    #[error("Did not get any files with the glob: {pattern}")]
    NoMatchingFiles { pattern: String },

    /// The file pattern could not be parsed.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// The file named by a reference could not be read.
    #[error("Could not read referenced file {fragment}: {source}")]
    UnreadableReference {
        fragment: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Which stage of the run an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTier {
    Configuration,
    Usage,
    Reference,
}

impl Error {
    /// Classify this error into its tier.
    pub fn tier(&self) -> ErrorTier {
        match self {
            Error::MissingPattern | Error::NoMatchingFiles { .. } | Error::Glob(_) => {
                ErrorTier::Usage
            }
            Error::UnreadableReference { .. } => ErrorTier::Reference,
            Error::RepositoryNotFound { .. }
            | Error::CommitUnavailable { .. }
            | Error::Io(_)
            | Error::Regex(_) => ErrorTier::Configuration,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
