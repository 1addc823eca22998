//! Expansion of command-line paths into the files to lint.
//!
//! Explicit file arguments are always linted. Directories are walked
//! recursively for JavaScript files, skipping hidden directories and
//! `node_modules`. The result is sorted and free of duplicates.

use std::path::{Path, PathBuf};

use jsstyle_syntax::is_javascript_path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::AppError;

const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Collects the files named by `paths`.
pub(crate) fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            walk_directory(path, &mut files);
        } else {
            return Err(AppError::MissingPath { path: path.clone() });
        }
    }
    files.sort();
    files.dedup();
    debug!(target: "jsstyle::cli", count = files.len(), "collected files");
    Ok(files)
}

fn walk_directory(root: &Path, files: &mut Vec<PathBuf>) {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry));
    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(error) => {
                warn!(target: "jsstyle::cli", %error, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && is_javascript_path(entry.path()) {
            files.push(entry.into_path());
        }
    }
}

/// Hidden directories and dependency folders below the walk root.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}
