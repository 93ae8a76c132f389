//! # Document Rewriting
//!
//! Ties extraction, line resolution and link synthesis together for one
//! document. Each reference is resolved on its own and replaced at the span
//! where it was found, so the output is never re-scanned and identical
//! references simply receive identical links.

use log::{debug, warn};

use crate::error::Error;
use crate::link::ResolvedLink;
use crate::reference::{self, Reference};
use crate::repository::RepositoryContext;
use crate::resolver;

/// Outcome of resolving a single reference.
#[derive(Debug)]
pub enum Resolution {
    Resolved(ResolvedLink),
    Failed(Error),
}

/// Resolve one reference against the external repository.
pub fn resolve(ctx: &RepositoryContext, reference: &Reference) -> Resolution {
    match resolver::resolve_line(&ctx.root, &reference.path, &reference.term) {
        Ok(line) => Resolution::Resolved(ResolvedLink::new(
            &ctx.target,
            &ctx.commit,
            &reference.path,
            line,
        )),
        Err(e) => Resolution::Failed(e),
    }
}

/// A rewritten document and the fragments that could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub failures: Vec<String>,
}

/// Replace every resolvable reference in `text` with its pinned link.
///
/// Unresolvable references are left untouched and their path fragments
/// returned in `failures`, in document order.
pub fn rewrite_document(ctx: &RepositoryContext, text: &str) -> Rewrite {
    let mut content = String::with_capacity(text.len());
    let mut failures = Vec::new();
    let mut cursor = 0;

    for reference in reference::extract(text) {
        match resolve(ctx, &reference) {
            Resolution::Resolved(link) => {
                debug!("{} -> {}", reference.raw, link);
                content.push_str(&text[cursor..reference.span.start]);
                content.push_str(": ");
                content.push_str(&link.to_string());
                cursor = reference.span.end;
            }
            Resolution::Failed(e) => {
                warn!("{}", e);
                failures.push(reference.path);
            }
        }
    }
    content.push_str(&text[cursor..]);

    Rewrite { content, failures }
}
