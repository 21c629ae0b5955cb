//! Core data models for sfpack
//!
//! Defines the fundamental data structures used throughout sfpack:
//! - `ComponentRecord`: a classified metadata component (type + name)
//! - `MetadataMap`: discovered components grouped by metadata type
//! - The static folder and sub-component tables that drive classification

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// API version written into manifests when the project does not pin one
pub const DEFAULT_API_VERSION: &str = "60.0";

/// Source folders recognized under `main/default`, paired with their
/// metadata type API names. Closed set; new types are added here, not by
/// adding code paths.
pub const METADATA_FOLDERS: &[(&str, &str)] = &[
    ("classes", "ApexClass"),
    ("triggers", "ApexTrigger"),
    ("aura", "AuraDefinitionBundle"),
    ("lwc", "LightningComponentBundle"),
    ("pages", "ApexPage"),
    ("components", "ApexComponent"),
    ("staticresources", "StaticResource"),
    ("objects", "CustomObject"),
    ("tabs", "CustomTab"),
    ("permissionsets", "PermissionSet"),
    ("profiles", "Profile"),
    ("workflows", "Workflow"),
    ("labels", "CustomLabels"),
];

/// Types whose folder structure is part of the component name
const FOLDER_AWARE_TYPES: &[&str] = &[
    "Report",
    "Dashboard",
    "EmailTemplate",
    "Document",
    "Flow",
    "Workflow",
];

/// Types where the component is a directory of files, not a single file
const BUNDLE_TYPES: &[&str] = &["AuraDefinitionBundle", "LightningComponentBundle"];

/// Types rendered as nested trees when names contain `/`
const HIERARCHICAL_TYPES: &[&str] = &["CustomObject", "ApexClass", "ApexTrigger"];

/// CustomObject sub-component rows: (sub-folder, file suffix, derived type)
///
/// A file under `<Object>/<sub-folder>/` whose name carries the matching
/// suffix is reclassified from CustomObject to the derived type.
pub const OBJECT_SUBCOMPONENTS: &[(&str, &str, &str)] = &[
    ("fields", ".field-meta.xml", "CustomField"),
    ("validationRules", ".validationRule-meta.xml", "ValidationRule"),
    ("listViews", ".listView-meta.xml", "ListView"),
    ("webLinks", ".webLink-meta.xml", "WebLink"),
    ("recordTypes", ".recordType-meta.xml", "RecordType"),
    ("compactLayouts", ".compactLayout-meta.xml", "CompactLayout"),
    ("businessProcesses", ".businessProcess-meta.xml", "BusinessProcess"),
];

/// Look up the metadata type for a source folder name
pub fn folder_metadata_type(folder: &str) -> Option<&'static str> {
    METADATA_FOLDERS
        .iter()
        .find(|(name, _)| *name == folder)
        .map(|(_, metadata_type)| *metadata_type)
}

/// Whether directory structure is preserved in component names of this type
pub fn is_folder_aware(metadata_type: &str) -> bool {
    FOLDER_AWARE_TYPES.contains(&metadata_type)
}

/// Whether components of this type are directories (bundles)
pub fn is_bundle(metadata_type: &str) -> bool {
    BUNDLE_TYPES.contains(&metadata_type)
}

/// Whether tree views nest this type's component names on `/`
pub fn is_hierarchical(metadata_type: &str) -> bool {
    HIERARCHICAL_TYPES.contains(&metadata_type)
}

/// A classified metadata component
///
/// Identity is the (type, name) pair. Names always use `/` separators,
/// regardless of host OS.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Metadata type API name (e.g. `ApexClass`)
    #[serde(rename = "type")]
    pub metadata_type: String,

    /// Component name, possibly path-shaped (e.g. `subdir/MyFlow`)
    pub name: String,
}

impl ComponentRecord {
    /// Create a new component record
    pub fn new(metadata_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata_type: metadata_type.into(),
            name: name.into(),
        }
    }
}

/// Discovered components grouped by metadata type
///
/// Keys iterate in lexicographic type order; each value is a sorted,
/// deduplicated list of component names.
pub type MetadataMap = BTreeMap<String, Vec<String>>;
