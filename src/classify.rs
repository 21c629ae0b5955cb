//! Path classifier for metadata source files
//!
//! Maps a file path, relative to a folder whose metadata type is already
//! known, to a typed component record. Handles sidecar metadata suffixes,
//! custom object sub-components, and folder-aware component naming.

use crate::models::{self, ComponentRecord, OBJECT_SUBCOMPONENTS};

/// Sidecar suffix in its common dashed form (`Foo.cls-meta.xml`)
const META_SUFFIX_DASHED: &str = "-meta.xml";

/// Sidecar suffix in its dotted form (`Foo.page.meta.xml`)
const META_SUFFIX_DOTTED: &str = ".meta.xml";

/// Suffix of a custom object's own descriptor file
const OBJECT_META_SUFFIX: &str = ".object-meta.xml";

/// Classify a file path into a component record.
///
/// `relative_path` is relative to the folder already known to hold
/// `folder_type` components; either separator style is accepted and
/// normalized up front, so results are identical on every host OS. Returns
/// `None` for hidden files and for files matching no known pattern.
///
/// Pure function of its two inputs; no I/O.
pub fn classify_path(relative_path: &str, folder_type: &str) -> Option<ComponentRecord> {
    let path = relative_path.replace('\\', "/");
    let base = base_name(&path);

    // Skip hidden files
    if base.starts_with('.') {
        return None;
    }

    if folder_type == "CustomObject" {
        return classify_object_file(&path, base);
    }

    let stripped = strip_extension(strip_meta_suffix(&path));

    let name = if folder_type == "CustomLabels" {
        // A single CustomLabels component exists per org
        "CustomLabels".to_string()
    } else if models::is_folder_aware(folder_type) {
        stripped.to_string()
    } else {
        base_name(stripped).to_string()
    };

    if name.is_empty() {
        return None;
    }
    Some(ComponentRecord::new(folder_type, name))
}

/// Classify a file found under an objects folder.
///
/// Only the reserved sub-component patterns and the object descriptor
/// itself are recognized; anything else under an objects folder is dropped
/// rather than misfiled as a CustomObject member.
fn classify_object_file(path: &str, base: &str) -> Option<ComponentRecord> {
    for (folder, suffix, derived_type) in OBJECT_SUBCOMPONENTS {
        // The reserved folder must sit below an object directory, so it is
        // matched as an interior path segment.
        if path.contains(&format!("/{folder}/")) {
            if let Some(name) = base.strip_suffix(suffix) {
                return Some(ComponentRecord::new(*derived_type, name));
            }
        }
    }

    if let Some(name) = base.strip_suffix(OBJECT_META_SUFFIX) {
        return Some(ComponentRecord::new("CustomObject", name));
    }

    None
}

/// Final segment of a `/`-separated path
fn base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Strip a trailing sidecar suffix, if present, from the whole path.
///
/// The dashed form is checked first; `.object-meta.xml` and friends never
/// reach this function because the composite branch handles them.
fn strip_meta_suffix(path: &str) -> &str {
    if let Some(stripped) = path.strip_suffix(META_SUFFIX_DASHED) {
        stripped
    } else if let Some(stripped) = path.strip_suffix(META_SUFFIX_DOTTED) {
        stripped
    } else {
        path
    }
}

/// Strip at most one extension from the final path segment.
///
/// A leading dot does not start an extension, so dot-files keep their name.
fn strip_extension(path: &str) -> &str {
    let base_start = path.rfind('/').map_or(0, |idx| idx + 1);
    match path[base_start..].rfind('.') {
        Some(idx) if idx > 0 => &path[..base_start + idx],
        _ => path,
    }
}
