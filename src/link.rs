//! # Link Synthesis
//!
//! Builds the commit-pinned URL that replaces a shorthand reference:
//!
//! ```text
//! https://github.com/<owner>/<project>/blob/<commit>/<path>[#L<line>]
//! ```

use std::fmt;

use crate::defaults;

/// Where the external repository is hosted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub host: String,
    pub owner: String,
    pub project: String,
}

impl LinkTarget {
    pub fn new(
        host: impl Into<String>,
        owner: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            project: project.into(),
        }
    }

    /// Base URL of the repository, without trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.host.trim_end_matches('/'),
            self.owner,
            self.project
        )
    }
}

impl Default for LinkTarget {
    fn default() -> Self {
        Self::new(
            defaults::LINK_HOST,
            defaults::LINK_OWNER,
            defaults::LINK_PROJECT,
        )
    }
}

/// A resolved reference, ready to be written into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub base_url: String,
    pub commit: String,
    pub path: String,
    /// 1-based line number; `None` when the search term was not found.
    pub line: Option<usize>,
}

impl ResolvedLink {
    pub fn new(target: &LinkTarget, commit: &str, path: &str, line: Option<usize>) -> Self {
        Self {
            base_url: target.base_url(),
            commit: commit.to_string(),
            path: path.to_string(),
            line,
        }
    }
}

impl fmt::Display for ResolvedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/blob/{}/{}", self.base_url, self.commit, self.path)?;
        if let Some(line) = self.line {
            write!(f, "#L{}", line)?;
        }
        Ok(())
    }
}
