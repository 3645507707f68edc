//! Removal of intermediate text artifacts

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Remove the listed files, returning the ones actually deleted.
///
/// Only regular files are removed; missing paths, directories and symlinks
/// are skipped. Files that cannot be removed are logged and skipped.
pub fn cleanup(candidates: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = BTreeSet::new();
    let mut removed = Vec::new();

    for path in candidates {
        if !seen.insert(path) {
            continue;
        }

        let is_file = fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        match fs::remove_file(path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed intermediate file");
                removed.push(path.clone());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not remove intermediate file")
            }
        }
    }

    removed
}
