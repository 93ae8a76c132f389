//! # Doc Permalinks Library
//!
//! Rewrites shorthand references to an external repository into links pinned
//! to that repository's current commit. A documentation line such as
//!
//! ```text
//! [13]: <src/compiler/checker.ts - function checkIfStatement>
//! ```
//!
//! becomes
//!
//! ```text
//! [13]: https://github.com/microsoft/TypeScript/blob/8d986554/src/compiler/checker.ts#L30308
//! ```
//!
//! ## Quick Example
//!
//! ```
//! use doc_permalinks::link::LinkTarget;
//! use doc_permalinks::repository::RepositoryContext;
//! use doc_permalinks::rewrite::rewrite_document;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("b.txt"), "foo\nhello world\n").unwrap();
//!
//! let ctx = RepositoryContext::new(dir.path(), "abc12345", LinkTarget::default());
//! let rewrite = rewrite_document(&ctx, "[1]: <b.txt - hello>");
//! assert_eq!(
//!     rewrite.content,
//!     "[1]: https://github.com/microsoft/TypeScript/blob/abc12345/b.txt#L2"
//! );
//! ```
//!
//! ## Execution Flow
//!
//! 1.  **Locate** the external repository and pin its commit (`repository`,
//!     `git`). Failure here aborts the run.
//! 2.  **Select** the documents matching a glob (`selection`).
//! 3.  For each document, **extract** references (`reference`), **resolve**
//!     each to a line (`resolver`), and **substitute** the link (`link`,
//!     `rewrite`).
//! 4.  **Write or print** every document and report unresolved references
//!     (`report`).

pub mod defaults;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod link;
pub mod output;
pub mod reference;
pub mod report;
pub mod repository;
pub mod resolver;
pub mod rewrite;
pub mod selection;
pub mod suggestions;

#[cfg(test)]
mod rewrite_proptest;
