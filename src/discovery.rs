//! Metadata discovery
//!
//! Walks every package directory of a DX project, classifies the source
//! files found under `main/default`, and aggregates the results into a
//! sorted, de-duplicated map of metadata type to component names.
//!
//! Discovery never fails hard: a missing or malformed project file, or a
//! broken `.forceignore`, degrades to a warning and an empty (or partial)
//! result so callers can still render something useful.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classify::classify_path;
use crate::forceignore::{ForceIgnore, FORCEIGNORE_FILE};
use crate::models::{self, MetadataMap, DEFAULT_API_VERSION};
use crate::project::{load_project, ProjectLookup, PROJECT_FILE, SOURCE_SUBPATH};
use crate::walk::list_files_recursively;

/// Outcome of scanning a project for metadata.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// Metadata type -> sorted, de-duplicated component names
    pub metadata: MetadataMap,
    /// API version for manifest generation
    pub api_version: String,
    /// Soft failures encountered while scanning
    pub warnings: Vec<DiscoveryWarning>,
}

impl DiscoveryResult {
    /// Total number of components across all types.
    pub fn component_count(&self) -> usize {
        self.metadata.values().map(Vec::len).sum()
    }
}

/// A non-fatal problem found during discovery.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscoveryWarning {
    /// No sfdx-project.json at the project root
    ProjectFileMissing { path: PathBuf },
    /// sfdx-project.json exists but could not be parsed
    ProjectFileInvalid { path: PathBuf, message: String },
    /// .forceignore exists but could not be loaded
    ForceIgnoreInvalid { path: PathBuf, message: String },
}

impl fmt::Display for DiscoveryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectFileMissing { path } => {
                write!(f, "no {} found at {}", PROJECT_FILE, path.display())
            }
            Self::ProjectFileInvalid { path, message } => {
                write!(f, "could not parse {}: {}", path.display(), message)
            }
            Self::ForceIgnoreInvalid { message, .. } => {
                write!(f, "could not load {}: {}", FORCEIGNORE_FILE, message)
            }
        }
    }
}

/// Discover all metadata components in the project rooted at `project_root`.
///
/// Reads sfdx-project.json for the package directory list and API version,
/// honors `.forceignore`, and scans each `<pkgDir>/main/default` tree.
pub fn discover(project_root: &Path) -> DiscoveryResult {
    let mut warnings = Vec::new();

    let project = match load_project(project_root) {
        ProjectLookup::Found(project) => project,
        ProjectLookup::NotFound { path } => {
            warnings.push(DiscoveryWarning::ProjectFileMissing { path });
            return DiscoveryResult {
                metadata: MetadataMap::new(),
                api_version: DEFAULT_API_VERSION.to_string(),
                warnings,
            };
        }
        ProjectLookup::Malformed { path, message } => {
            warnings.push(DiscoveryWarning::ProjectFileInvalid { path, message });
            return DiscoveryResult {
                metadata: MetadataMap::new(),
                api_version: DEFAULT_API_VERSION.to_string(),
                warnings,
            };
        }
    };

    let ignore = match ForceIgnore::load(project_root) {
        Ok(ignore) => ignore,
        Err(e) => {
            warnings.push(DiscoveryWarning::ForceIgnoreInvalid {
                path: project_root.join(FORCEIGNORE_FILE),
                message: e.to_string(),
            });
            ForceIgnore::empty()
        }
    };

    let mut collected: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for package_dir in &project.package_directories {
        let source_root = project_root.join(&package_dir.path).join(SOURCE_SUBPATH);
        if !source_root.is_dir() {
            continue;
        }
        scan_source_root(&source_root, project_root, &ignore, &mut collected);
    }

    let metadata = collected
        .into_iter()
        .map(|(metadata_type, names)| (metadata_type, names.into_iter().collect()))
        .collect();

    DiscoveryResult {
        metadata,
        api_version: project.api_version().to_string(),
        warnings,
    }
}

/// Scan one `main/default` tree, dispatching each known type folder.
fn scan_source_root(
    source_root: &Path,
    project_root: &Path,
    ignore: &ForceIgnore,
    collected: &mut BTreeMap<String, BTreeSet<String>>,
) {
    let entries = match fs::read_dir(source_root) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let type_path = entry.path();
        if !type_path.is_dir() {
            continue;
        }

        let folder_name = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let metadata_type = match models::folder_metadata_type(&folder_name) {
            Some(metadata_type) => metadata_type,
            None => continue,
        };

        if models::is_bundle(metadata_type) {
            collect_bundles(&type_path, metadata_type, project_root, ignore, collected);
        } else {
            collect_components(&type_path, metadata_type, project_root, ignore, collected);
        }
    }
}

/// Bundle types are named after their immediate subdirectories.
fn collect_bundles(
    type_path: &Path,
    metadata_type: &str,
    project_root: &Path,
    ignore: &ForceIgnore,
    collected: &mut BTreeMap<String, BTreeSet<String>>,
) {
    let entries = match fs::read_dir(type_path) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => continue,
        };
        if name.starts_with('.') {
            continue;
        }
        if is_ignored(ignore, project_root, &path, true) {
            continue;
        }
        collected
            .entry(metadata_type.to_string())
            .or_default()
            .insert(name);
    }
}

/// File-based types walk the whole folder and classify each file.
fn collect_components(
    type_path: &Path,
    metadata_type: &str,
    project_root: &Path,
    ignore: &ForceIgnore,
    collected: &mut BTreeMap<String, BTreeSet<String>>,
) {
    for file in list_files_recursively(type_path) {
        if is_ignored(ignore, project_root, &file, false) {
            continue;
        }
        let relative = match file.strip_prefix(type_path) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let relative = match relative.to_str() {
            Some(relative) => relative,
            None => continue,
        };
        if let Some(record) = classify_path(relative, metadata_type) {
            collected
                .entry(record.metadata_type)
                .or_default()
                .insert(record.name);
        }
    }
}

fn is_ignored(ignore: &ForceIgnore, project_root: &Path, path: &Path, is_dir: bool) -> bool {
    if ignore.is_empty() {
        return false;
    }
    match path.strip_prefix(project_root) {
        Ok(relative) => ignore.is_ignored(relative, is_dir),
        Err(_) => false,
    }
}
