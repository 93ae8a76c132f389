//! Expands the user's glob pattern into the documents to process.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::defaults;
use crate::error::{Error, Result};

/// Return the files matching `pattern`, in glob order.
///
/// A path that is literally `README.md` is always skipped. Directories are
/// ignored, and entries that cannot be read while globbing are logged and
/// dropped.
pub fn select_files(pattern: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = match pattern {
        Some(p) if !p.is_empty() => p,
        _ => return Err(Error::MissingPattern),
    };

    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        match entry {
            Ok(path) if path.is_dir() => continue,
            Ok(path) if is_excluded(&path) => {
                debug!("Skipping {}", path.display());
            }
            Ok(path) => files.push(path),
            Err(e) => warn!("Could not read {}: {}", e.path().display(), e.error()),
        }
    }

    if files.is_empty() {
        return Err(Error::NoMatchingFiles {
            pattern: pattern.to_string(),
        });
    }
    Ok(files)
}

fn is_excluded(path: &Path) -> bool {
    path == Path::new(defaults::EXCLUDED_FILE)
}
