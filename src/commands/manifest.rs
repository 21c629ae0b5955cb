//! Manifest command handler
//!
//! Builds a package.xml from discovered metadata. With no selection flags
//! the whole project goes in; `--type` pulls every discovered component of
//! a type and `--select` adds individual TYPE:NAME pairs.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;

use sfpack::{build_manifest, discover, parse_selector, write_manifest};
use sfpack::{ComponentRecord, SfpackError};

#[allow(clippy::too_many_arguments)]
pub fn cmd_manifest(
    project_dir: &Path,
    select: &[String],
    types: &[String],
    api_version: Option<&str>,
    output: Option<&Path>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    if !project_dir.is_dir() {
        return Err(anyhow::Error::new(SfpackError::ProjectDirNotFound {
            path: project_dir.to_path_buf(),
        }));
    }

    let result = discover(project_dir);

    let selected = if select.is_empty() && types.is_empty() {
        // No selection means the whole project
        result
            .metadata
            .iter()
            .flat_map(|(metadata_type, names)| {
                names
                    .iter()
                    .map(move |name| ComponentRecord::new(metadata_type.clone(), name.clone()))
            })
            .collect::<Vec<_>>()
    } else {
        let mut selected = Vec::new();
        for metadata_type in types {
            if let Some(names) = result.metadata.get(metadata_type) {
                for name in names {
                    selected.push(ComponentRecord::new(metadata_type.clone(), name.clone()));
                }
            }
        }
        for selector in select {
            selected.push(parse_selector(selector)?);
        }
        selected
    };

    let version = api_version.unwrap_or(&result.api_version);
    let document = build_manifest(&selected, version);
    let component_count = selected.iter().collect::<BTreeSet<_>>().len();

    if json {
        if let Some(path) = output {
            write_manifest(path, &document)?;
        }
        let out = serde_json::json!({
            "type": "manifest",
            "apiVersion": version,
            "components": component_count,
            "packageXml": document,
            "warnings": result.warnings,
            "output": output.map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    for warning in &result.warnings {
        eprintln!("⚠ {}", warning);
    }

    match output {
        Some(path) => {
            println!("📦 sfpack Manifest");
            println!("Project: {}", project_dir.display());
            if verbose >= 1 {
                println!("Components: {}", component_count);
                println!("API version: {}", version);
            }
            write_manifest(path, &document)?;
            println!("✓ Wrote manifest to {}", path.display());
        }
        None => {
            // Bare document on stdout so it can be piped or redirected
            if verbose >= 1 {
                eprintln!("Components: {}", component_count);
                eprintln!("API version: {}", version);
            }
            println!("{}", document);
        }
    }

    Ok(())
}
