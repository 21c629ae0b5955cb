//! List command handler
//!
//! Discovers metadata in a DX project and prints it either as a flat
//! listing per type or as a tree (`--tree`).

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use sfpack::hierarchy::MetadataNode;
use sfpack::project::PROJECT_FILE;
use sfpack::{discover, organize, SfpackError};

pub fn cmd_list(project_dir: &Path, tree: bool, json: bool, verbose: u8) -> Result<()> {
    if !project_dir.is_dir() {
        return Err(anyhow::Error::new(SfpackError::ProjectDirNotFound {
            path: project_dir.to_path_buf(),
        }));
    }

    let result = discover(project_dir);

    if json {
        let mut out = serde_json::json!({
            "type": "list",
            "apiVersion": result.api_version,
            "metadata": result.metadata,
            "warnings": result.warnings,
        });
        if tree {
            out["tree"] = serde_json::to_value(organize(&result.metadata))?;
        }
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    println!("🔍 sfpack List");
    println!("Project: {}", project_dir.display());
    if verbose >= 1 {
        println!("Config: {}", project_dir.join(PROJECT_FILE).display());
    }
    println!();

    for warning in &result.warnings {
        eprintln!("⚠ {}", warning);
    }

    if result.metadata.is_empty() {
        println!("No metadata found.");
        return Ok(());
    }

    if tree {
        print!("{}", render_tree(&organize(&result.metadata)));
    } else {
        for (metadata_type, names) in &result.metadata {
            println!("{} ({})", metadata_type, names.len());
            for name in names {
                println!("  {}", name);
            }
        }
    }

    println!();
    println!(
        "✓ {} components in {} types",
        result.component_count(),
        result.metadata.len()
    );
    println!("API version: {}", result.api_version);

    Ok(())
}

/// Render the organized tree as indented text.
///
/// Grouping nodes that aren't themselves components get a trailing slash;
/// type roots stay bare.
fn render_tree(tree: &BTreeMap<String, MetadataNode>) -> String {
    let mut out = String::new();
    for root in tree.values() {
        render_node(root, 0, &mut out);
    }
    out
}

fn render_node(node: &MetadataNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&node.display_name);
    if depth > 0 && !node.selectable && !node.children.is_empty() {
        out.push('/');
    }
    out.push('\n');
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}
