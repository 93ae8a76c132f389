//! Finds the line a reference points at.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

/// Return the 1-based number of the first line of `content` containing
/// `term` literally.
///
/// Both `\n` and `\r\n` line endings are accepted.
pub fn find_line(content: &str, term: &str) -> Result<Option<usize>> {
    let re = Regex::new(&regex::escape(term))?;
    Ok(content
        .lines()
        .position(|line| re.is_match(line))
        .map(|index| index + 1))
}

/// Read `root/fragment` and find the first line containing `term`.
///
/// The fragment always stays under `root`, even with a leading separator.
/// Bytes that are not valid UTF-8 are replaced, not rejected.
///
/// An unreadable file is an [`Error::UnreadableReference`]. A readable file
/// without the term is `Ok(None)`.
pub fn resolve_line(root: &Path, fragment: &str, term: &str) -> Result<Option<usize>> {
    let path = root.join(fragment.trim_start_matches(['/', '\\']));
    let bytes = fs::read(path).map_err(|source| Error::UnreadableReference {
        fragment: fragment.to_string(),
        source,
    })?;
    find_line(&String::from_utf8_lossy(&bytes), term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_line_first_match() {
        let content = "foo\nhello world\nbar\nhello again";
        assert_eq!(find_line(content, "hello").unwrap(), Some(2));
    }

    #[test]
    fn test_find_line_crlf() {
        let content = "foo\r\nbar\r\nbaz\r\n";
        assert_eq!(find_line(content, "baz").unwrap(), Some(3));
        assert_eq!(find_line(content, "bar\r").unwrap(), None);
    }

    #[test]
    fn test_find_line_no_match() {
        assert_eq!(find_line("foo\nbar", "missing").unwrap(), None);
    }

    #[test]
    fn test_find_line_is_literal() {
        let content = "axbc\na.b(c)\n";
        assert_eq!(find_line(content, "a.b").unwrap(), Some(2));
        assert_eq!(find_line(content, "a.b(c)").unwrap(), Some(2));
        assert_eq!(find_line("axbc\n", "a.b").unwrap(), None);
        assert_eq!(find_line("x+y\n", "x+y").unwrap(), Some(1));
        assert_eq!(find_line("xxy\n", "x+y").unwrap(), None);
    }

    #[test]
    fn test_find_line_empty_term_matches_first_line() {
        assert_eq!(find_line("first\nsecond", "").unwrap(), Some(1));
    }

    #[test]
    fn test_resolve_line_reads_relative_to_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("a")).unwrap();
        fs::write(temp_dir.path().join("a/b.txt"), "foo\nhello world\nbar").unwrap();

        assert_eq!(
            resolve_line(temp_dir.path(), "a/b.txt", "hello").unwrap(),
            Some(2)
        );
    }

    #[test]
    fn test_resolve_line_leading_slash_stays_in_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/a.ts"), "x\nhello\n").unwrap();

        assert_eq!(
            resolve_line(temp_dir.path(), "/src/a.ts", "hello").unwrap(),
            Some(2)
        );
    }

    #[test]
    fn test_resolve_line_invalid_utf8_still_matches() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("latin1.txt"), b"caf\xe9\nhello\n").unwrap();

        assert_eq!(
            resolve_line(temp_dir.path(), "latin1.txt", "hello").unwrap(),
            Some(2)
        );
    }

    #[test]
    fn test_resolve_line_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_line(temp_dir.path(), "missing.ts", "x").unwrap_err();
        match err {
            Error::UnreadableReference { fragment, .. } => assert_eq!(fragment, "missing.ts"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
