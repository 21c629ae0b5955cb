//! Recursive file enumeration for metadata folders
//!
//! A complete enumeration: nothing is filtered at this layer. Deciding
//! which files matter is the classifier's job.

use std::fs;
use std::path::{Path, PathBuf};

/// List every regular file under `dir`, descending into all subdirectories.
///
/// A missing root is a normal condition and yields an empty list. Entries
/// that cannot be read are skipped, so a partially unreadable tree degrades
/// to fewer results instead of an error. Callers must not rely on the
/// returned order.
pub fn list_files_recursively(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_files(dir, &mut files);
    files
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, files);
        } else {
            files.push(path);
        }
    }
}
