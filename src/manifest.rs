//! Manifest generation
//!
//! Renders selected components into a Salesforce package.xml document.
//! Types appear in first-selected order with members sorted inside each
//! `<types>` block, matching what the Metadata API expects.

use std::fs;
use std::path::Path;

use crate::error::{SfpackError, SfpackResult};
use crate::models::ComponentRecord;

/// Namespace required on the package.xml root element
pub const MANIFEST_XMLNS: &str = "http://soap.sforce.com/2006/04/metadata";

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "    ";

/// Render a package.xml document for the given components.
///
/// Duplicate records collapse into one member. The returned string has no
/// trailing newline; callers decide how to terminate it.
pub fn build_manifest(selected: &[ComponentRecord], api_version: &str) -> String {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for record in selected {
        match groups
            .iter_mut()
            .find(|(metadata_type, _)| *metadata_type == record.metadata_type)
        {
            Some((_, members)) => {
                if !members.contains(&record.name.as_str()) {
                    members.push(&record.name);
                }
            }
            None => groups.push((&record.metadata_type, vec![&record.name])),
        }
    }

    let mut lines = Vec::new();
    lines.push(XML_PROLOG.to_string());
    lines.push(format!(r#"<Package xmlns="{}">"#, MANIFEST_XMLNS));

    for (metadata_type, mut members) in groups {
        members.sort_unstable();
        lines.push(format!("{}<types>", INDENT));
        lines.push(format!(
            "{}{}<name>{}</name>",
            INDENT,
            INDENT,
            escape_xml(metadata_type)
        ));
        for member in members {
            lines.push(format!(
                "{}{}<members>{}</members>",
                INDENT,
                INDENT,
                escape_xml(member)
            ));
        }
        lines.push(format!("{}</types>", INDENT));
    }

    lines.push(format!(
        "{}<version>{}</version>",
        INDENT,
        escape_xml(api_version)
    ));
    lines.push("</Package>".to_string());

    lines.join("\n")
}

/// Parse a `TYPE:NAME` selector into a component record.
///
/// Both sides are trimmed; either side being empty is an error.
pub fn parse_selector(value: &str) -> SfpackResult<ComponentRecord> {
    let invalid = || SfpackError::InvalidSelector {
        value: value.to_string(),
    };

    let (metadata_type, name) = value.split_once(':').ok_or_else(invalid)?;
    let metadata_type = metadata_type.trim();
    let name = name.trim();
    if metadata_type.is_empty() || name.is_empty() {
        return Err(invalid());
    }

    Ok(ComponentRecord::new(metadata_type, name))
}

/// Write a manifest document to disk, creating parent directories.
pub fn write_manifest(path: &Path, document: &str) -> SfpackResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, document)?;
    Ok(())
}

/// Escape text for XML element content.
fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
