//! # External Repository Location
//!
//! Finds the external repository on disk and pins its current commit. The
//! result, a [`RepositoryContext`], is computed once at startup and passed by
//! reference to everything that resolves references.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::defaults;
use crate::error::{Error, Result};
use crate::git;
use crate::link::LinkTarget;

/// How to find the external repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Directories checked in order; the first containing `marker` wins.
    pub candidates: Vec<PathBuf>,
    /// File identifying the repository root.
    pub marker: String,
}

impl RepositoryConfig {
    /// Put an extra directory in front of the candidate list.
    pub fn with_preferred(mut self, dir: impl Into<PathBuf>) -> Self {
        self.candidates.insert(0, dir.into());
        self
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            candidates: defaults::candidate_dirs(),
            marker: defaults::MARKER_FILE.to_string(),
        }
    }
}

/// Read-only facts about the external repository for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryContext {
    pub root: PathBuf,
    pub commit: String,
    pub target: LinkTarget,
}

impl RepositoryContext {
    pub fn new(root: impl Into<PathBuf>, commit: impl Into<String>, target: LinkTarget) -> Self {
        Self {
            root: root.into(),
            commit: commit.into(),
            target,
        }
    }

    /// Locate the repository and read its short commit id.
    pub fn discover(config: &RepositoryConfig, target: LinkTarget) -> Result<Self> {
        let root = locate(&config.candidates, &config.marker)?;
        let commit = git::short_head(&root, defaults::SHORT_COMMIT_WIDTH)?;
        info!("Using {} at commit {}", root.display(), commit);
        Ok(Self::new(root, commit, target))
    }
}

/// Return the first candidate directory that contains `marker`.
pub fn locate(candidates: &[PathBuf], marker: &str) -> Result<PathBuf> {
    candidates
        .iter()
        .find(|dir| has_marker(dir, marker))
        .cloned()
        .ok_or_else(|| Error::RepositoryNotFound {
            candidates: candidates.to_vec(),
            marker: marker.to_string(),
        })
}

fn has_marker(dir: &Path, marker: &str) -> bool {
    let found = dir.join(marker).is_file();
    debug!("Checking {} for {}: {}", dir.display(), marker, found);
    found
}
