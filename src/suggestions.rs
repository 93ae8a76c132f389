//! # Error Suggestions
//!
//! Turns fatal library errors into messages that say what went wrong AND how
//! to fix it.
//!
//! ```rust,ignore
//! use doc_permalinks::suggestions;
//!
//! let files = select_files(pattern).map_err(suggestions::explain)?;
//! ```

use crate::defaults;
use crate::error::Error;

/// Wrap a library error in an `anyhow::Error` carrying `hint:` lines where
/// there is something useful to suggest.
pub fn explain(error: Error) -> anyhow::Error {
    let hints: Vec<String> = match &error {
        Error::RepositoryNotFound { marker, .. } => vec![
            format!(
                "Clone the external repository next to this one (e.g. {})",
                defaults::CANDIDATE_DIRS[1]
            ),
            format!("Use --repo <DIR> to point at a checkout containing {marker}"),
            "Set the DOC_PERMALINKS_REPO environment variable".to_string(),
        ],
        Error::CommitUnavailable { .. } => vec![
            "Make sure the external repository is a git checkout with at least one commit"
                .to_string(),
        ],
        Error::MissingPattern => vec![
            "Pass a glob as the first argument, e.g. 'docs/**/*.md'".to_string(),
            "Quote the glob so your shell does not expand it".to_string(),
        ],
        Error::NoMatchingFiles { .. } => vec![
            "Check the pattern is relative to the current directory".to_string(),
            format!(
                "A top-level {} is never processed",
                defaults::EXCLUDED_FILE
            ),
        ],
        Error::Glob(_) => vec![
            "Use * for single path component, ** for recursive matching".to_string(),
            "Use [abc] for character classes, [!abc] to negate".to_string(),
        ],
        _ => Vec::new(),
    };

    if hints.is_empty() {
        return anyhow::Error::new(error);
    }

    let mut message = format!("{error}\n");
    for hint in hints {
        message.push_str(&format!("\nhint: {hint}"));
    }
    anyhow::anyhow!(message)
}
