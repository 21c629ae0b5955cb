//! sfpack - Salesforce DX metadata discovery and packaging tool
//!
//! sfpack scans a DX project's package directories, classifies source files
//! into Metadata API components, and generates package.xml manifests for
//! deployments and retrievals.

pub mod classify;
pub mod discovery;
pub mod error;
pub mod forceignore;
pub mod hierarchy;
pub mod manifest;
pub mod models;
pub mod project;
pub mod walk;

// Re-exports for convenience
pub use classify::classify_path;
pub use discovery::{discover, DiscoveryResult, DiscoveryWarning};
pub use error::{SfpackError, SfpackResult};
pub use forceignore::ForceIgnore;
pub use hierarchy::{organize, MetadataNode};
pub use manifest::{build_manifest, parse_selector, write_manifest};
pub use models::{ComponentRecord, MetadataMap, DEFAULT_API_VERSION};
pub use project::{load_project, ProjectLookup, SfdxProject};
pub use walk::list_files_recursively;
