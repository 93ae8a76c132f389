//! # Writing and Reporting
//!
//! Runs every selected document through [`rewrite_document`], then either
//! writes the result back or prints it. Unresolved references from all
//! documents are collected into a [`FailureReport`] instead of stopping the
//! run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::output::{emoji, error_heading, OutputConfig};
use crate::repository::RepositoryContext;
use crate::rewrite::rewrite_document;

/// What to do with a rewritten document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print the rewritten document, leave the file alone.
    #[default]
    DryRun,
    /// Overwrite the document in place.
    Write,
}

/// A reference that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub document: PathBuf,
    pub fragment: String,
}

/// All failures of a run, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureReport {
    records: Vec<FailureRecord>,
}

impl FailureReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, document: impl Into<PathBuf>, fragment: impl Into<String>) {
        self.records.push(FailureRecord {
            document: document.into(),
            fragment: fragment.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[FailureRecord] {
        &self.records
    }

    /// Failures grouped by document, documents in first-seen order.
    pub fn by_document(&self) -> Vec<(&Path, Vec<&str>)> {
        let mut groups: Vec<(&Path, Vec<&str>)> = Vec::new();
        for record in &self.records {
            let position = groups
                .iter()
                .position(|(doc, _)| *doc == record.document.as_path());
            match position {
                Some(i) => groups[i].1.push(record.fragment.as_str()),
                None => groups.push((record.document.as_path(), vec![record.fragment.as_str()])),
            }
        }
        groups
    }

    /// Human-readable report, one document per block.
    pub fn render(&self, out: &OutputConfig) -> String {
        let mut text = format!(
            "{} {}\n",
            emoji(out, "❌", "[FAIL]"),
            error_heading(out, "Could not find the following references to update:")
        );
        for (document, fragments) in self.by_document() {
            text.push_str(&format!("  {}\n", document.display()));
            for fragment in fragments {
                text.push_str(&format!("    - {}\n", fragment));
            }
        }
        text.push_str(&format!(
            "\n{} These files have likely moved in the external repository; update the paths.\n",
            emoji(out, "💡", "hint:")
        ));
        text
    }
}

/// Rewrite every document in `files`.
///
/// In [`Mode::DryRun`] each rewritten document is printed to `stdout`
/// followed by a newline. In [`Mode::Write`] it replaces the file on disk.
/// Documents are always emitted, even when some of their references failed.
pub fn process_documents<W: Write>(
    ctx: &RepositoryContext,
    files: &[PathBuf],
    mode: Mode,
    stdout: &mut W,
) -> Result<FailureReport> {
    let mut report = FailureReport::new();

    for file in files {
        info!("Processing {}", file.display());
        let text = fs::read_to_string(file)?;
        let rewrite = rewrite_document(ctx, &text);

        for fragment in rewrite.failures {
            report.push(file.clone(), fragment);
        }

        match mode {
            Mode::Write => fs::write(file, &rewrite.content)?,
            Mode::DryRun => writeln!(stdout, "{}", rewrite.content)?,
        }
    }

    Ok(report)
}
