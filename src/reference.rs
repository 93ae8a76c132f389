//! # Shorthand Reference Extraction
//!
//! Documents cite the external repository with lines like:
//!
//! ```text
//! [13]: <src/compiler/checker.ts - function checkIfStatement>
//! ```
//!
//! [`extract`] finds every such citation and records the byte span of the
//! `: <path - term>` tail, which is the part later replaced by a link.
//!
//! Matching is greedy and line-bound. A path or term that itself contains
//! ` - ` or `>` splits at the last separator on the line.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*]: <(.*) - (.*)>").expect("reference pattern is valid"));

/// One shorthand citation found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The whole matched text, label included.
    pub raw: String,
    /// Path relative to the external repository root.
    pub path: String,
    /// Literal text identifying the target line.
    pub term: String,
    /// Byte range of `: <path - term>` in the document.
    pub span: Range<usize>,
}

impl Reference {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let whole = caps.get(0)?;
        let path = caps.get(1)?;
        let term = caps.get(2)?;
        // The tail starts at the ": <" right before the path.
        let start = path.start().checked_sub(": <".len())?;
        Some(Self {
            raw: whole.as_str().to_string(),
            path: path.as_str().to_string(),
            term: term.as_str().to_string(),
            span: start..whole.end(),
        })
    }
}

/// Iterate over the references in `text`, in document order.
pub fn extract(text: &str) -> impl Iterator<Item = Reference> + '_ {
    REFERENCE_RE
        .captures_iter(text)
        .filter_map(|caps| Reference::from_captures(&caps))
}
