use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Read the current commit of the repository at `root`, shortened to `width`
/// characters.
///
/// This uses the system git command, so any repository layout git understands
/// (worktrees, submodules) works.
pub fn short_head(root: &Path, width: usize) -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(root)
        .output()
        .map_err(|e| Error::CommitUnavailable {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::CommitUnavailable {
            root: root.to_path_buf(),
            message: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    shorten(stdout.trim(), width).ok_or_else(|| Error::CommitUnavailable {
        root: root.to_path_buf(),
        message: "git rev-parse HEAD produced no output".to_string(),
    })
}

/// Truncate a full commit id to `width` characters. Empty input yields `None`.
fn shorten(commit: &str, width: usize) -> Option<String> {
    if commit.is_empty() {
        return None;
    }
    Some(commit.chars().take(width).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_shorten_truncates() {
        assert_eq!(
            shorten("8d986554a1b2c3d4e5f60718293a4b5c6d7e8f90", 8),
            Some("8d986554".to_string())
        );
    }

    #[test]
    fn test_shorten_keeps_short_input() {
        assert_eq!(shorten("abc", 8), Some("abc".to_string()));
    }

    #[test]
    fn test_shorten_empty_is_none() {
        assert_eq!(shorten("", 8), None);
    }

    #[test]
    fn test_short_head_outside_repository_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A fresh temp dir is not inside a git work tree (unless TMPDIR is).
        if Command::new("git")
            .args(["rev-parse", "--is-inside-work-tree"])
            .current_dir(temp_dir.path())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return;
        }

        let err = short_head(temp_dir.path(), 8).unwrap_err();
        assert!(matches!(err, Error::CommitUnavailable { .. }));
    }
}
