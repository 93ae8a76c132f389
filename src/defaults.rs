//! Default values for doc-permalinks.
//!
//! This module provides centralized default values used by the CLI and the
//! library, so the external repository's identity is defined in one place.

use std::path::PathBuf;

/// Directories checked, in order, for the external repository.
pub const CANDIDATE_DIRS: &[&str] = &["../typescript-compiler", "../TypeScript", "TypeScript"];

/// File whose presence marks a candidate directory as the repository root.
pub const MARKER_FILE: &str = "package.json";

/// Host serving the external repository.
pub const LINK_HOST: &str = "https://github.com";

/// Owner of the external repository on the host.
pub const LINK_OWNER: &str = "microsoft";

/// Project name of the external repository on the host.
pub const LINK_PROJECT: &str = "TypeScript";

/// Number of hex characters kept from the commit id.
pub const SHORT_COMMIT_WIDTH: usize = 8;

/// Top-level file that is never rewritten.
pub const EXCLUDED_FILE: &str = "README.md";

/// Returns the default candidate directories as paths.
pub fn candidate_dirs() -> Vec<PathBuf> {
    CANDIDATE_DIRS.iter().map(PathBuf::from).collect()
}
