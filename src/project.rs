//! Project configuration (`sfdx-project.json`)
//!
//! The descriptor declares the ordered package directories to scan and may
//! pin a source API version. Loading is total: every failure mode collapses
//! into an explicit lookup variant so discovery can degrade instead of
//! failing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_API_VERSION;

/// File name of the project descriptor
pub const PROJECT_FILE: &str = "sfdx-project.json";

/// Conventional source sub-path under each package directory
pub const SOURCE_SUBPATH: &str = "main/default";

/// Parsed `sfdx-project.json`
///
/// The descriptor carries many fields this tool does not read; unknown
/// keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SfdxProject {
    /// Source roots in declared order
    #[serde(default)]
    pub package_directories: Vec<PackageDirectory>,

    /// Pinned API version, if any
    #[serde(default)]
    pub source_api_version: Option<String>,
}

/// One entry of `packageDirectories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDirectory {
    /// Path relative to the project root
    pub path: String,

    /// Whether this is the default package directory
    #[serde(default)]
    pub default: bool,
}

impl SfdxProject {
    /// Effective API version: the pinned one, or the tool default.
    ///
    /// An empty pin counts as absent.
    pub fn api_version(&self) -> &str {
        match self.source_api_version.as_deref() {
            Some(version) if !version.is_empty() => version,
            _ => DEFAULT_API_VERSION,
        }
    }
}

/// Result of locating and parsing the project descriptor
#[derive(Debug)]
pub enum ProjectLookup {
    /// Descriptor present and parsed
    Found(SfdxProject),
    /// No descriptor at the expected path
    NotFound { path: PathBuf },
    /// Descriptor present but unreadable or unparsable
    Malformed { path: PathBuf, message: String },
}

/// Locate and parse `sfdx-project.json` under `project_root`.
pub fn load_project(project_root: &Path) -> ProjectLookup {
    let path = project_root.join(PROJECT_FILE);

    if !path.exists() {
        return ProjectLookup::NotFound { path };
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            return ProjectLookup::Malformed {
                path,
                message: err.to_string(),
            }
        }
    };

    match serde_json::from_str::<SfdxProject>(&content) {
        Ok(project) => ProjectLookup::Found(project),
        Err(err) => ProjectLookup::Malformed {
            path,
            message: err.to_string(),
        },
    }
}
