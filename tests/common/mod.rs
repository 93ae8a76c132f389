//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_external_repo(&[("a.ts", "x")]);
//!     fixture.command().arg("*.md").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
    #[allow(unused_imports)]
    pub use super::EXTERNAL_DIR;
}

/// Directory name of the external repository inside the fixture. It is one
/// of the default candidates, so no `--repo` flag is needed.
pub const EXTERNAL_DIR: &str = "TypeScript";

/// A temporary working directory holding documentation files and, optionally,
/// a git-backed external repository.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create the external repository with the given files, a `package.json`
    /// marker, and a single commit.
    pub fn with_external_repo(self, files: &[(&str, &str)]) -> Self {
        let repo = self.temp_dir.child(EXTERNAL_DIR);
        repo.child("package.json")
            .write_str("{}")
            .expect("Failed to write marker");
        for (path, content) in files {
            repo.child(path)
                .write_str(content)
                .expect("Failed to write external file");
        }

        git(repo.path(), &["init"]);
        git(repo.path(), &["config", "user.email", "test@example.com"]);
        git(repo.path(), &["config", "user.name", "Test User"]);
        git(repo.path(), &["config", "commit.gpgsign", "false"]);
        git(repo.path(), &["add", "."]);
        git(repo.path(), &["commit", "-m", "Initial commit"]);
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a file from the fixture.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Short commit id of the external repository.
    pub fn short_commit(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(self.path().join(EXTERNAL_DIR))
            .output()
            .expect("Failed to run git");
        String::from_utf8_lossy(&output.stdout).trim()[..8].to_string()
    }

    /// Pinned link for `path` at `line` in the external repository.
    pub fn link(&self, path: &str, line: Option<usize>) -> String {
        let anchor = line.map(|l| format!("#L{l}")).unwrap_or_default();
        format!(
            "https://github.com/microsoft/TypeScript/blob/{}/{}{}",
            self.short_commit(),
            path,
            anchor
        )
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("doc-permalinks");
        cmd.current_dir(self.path())
            .env_remove("DOC_PERMALINKS_REPO")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git")
        .status;
    assert!(status.success(), "git {:?} failed", args);
}
