//! Hierarchy organization
//!
//! Turns the flat discovery map into a tree suitable for display or
//! selection UIs: one root node per metadata type, with component nodes
//! underneath. Types whose names encode structure (CustomObject and its
//! parents, Apex classes and triggers) get their slash-separated names
//! grouped into nested branches.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{self, MetadataMap};

/// A node in the organized metadata tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataNode {
    /// Full name, unique within the metadata type (e.g. "handlers/Audit")
    pub name: String,
    /// Label for display (last path segment)
    pub display_name: String,
    /// Metadata type this node belongs to
    #[serde(rename = "type")]
    pub metadata_type: String,
    /// Whether this node names a real component (not just a grouping)
    pub selectable: bool,
    /// Child nodes, sorted by display name
    pub children: Vec<MetadataNode>,
}

/// Organize discovered metadata into one tree per type.
///
/// Root nodes carry the type name and are never selectable. A nested node
/// is selectable only when its full name was actually discovered, so a
/// name that is both a component and a prefix of deeper names keeps both
/// roles.
pub fn organize(metadata: &MetadataMap) -> BTreeMap<String, MetadataNode> {
    metadata
        .iter()
        .map(|(metadata_type, names)| {
            let children = if models::is_hierarchical(metadata_type) {
                let mut grouping = Grouping::default();
                for name in names {
                    grouping.insert(name);
                }
                grouping.into_nodes(metadata_type, "")
            } else {
                leaf_nodes(metadata_type, names)
            };

            let root = MetadataNode {
                name: metadata_type.clone(),
                display_name: metadata_type.clone(),
                metadata_type: metadata_type.clone(),
                selectable: false,
                children,
            };
            (metadata_type.clone(), root)
        })
        .collect()
}

/// Flat component names become one leaf node each.
fn leaf_nodes(metadata_type: &str, names: &[String]) -> Vec<MetadataNode> {
    names
        .iter()
        .map(|name| MetadataNode {
            name: name.clone(),
            display_name: name.clone(),
            metadata_type: metadata_type.to_string(),
            selectable: true,
            children: Vec::new(),
        })
        .collect()
}

/// Intermediate trie over slash-separated names.
///
/// `terminal` marks segments that correspond to a discovered name, which
/// is what decides selectability once the trie is flattened into nodes.
#[derive(Debug, Default)]
struct Grouping {
    terminal: bool,
    children: BTreeMap<String, Grouping>,
}

impl Grouping {
    fn insert(&mut self, name: &str) {
        let mut current = self;
        for segment in name.split('/') {
            current = current.children.entry(segment.to_string()).or_default();
        }
        current.terminal = true;
    }

    fn into_nodes(self, metadata_type: &str, prefix: &str) -> Vec<MetadataNode> {
        self.children
            .into_iter()
            .map(|(segment, group)| {
                let name = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{}/{}", prefix, segment)
                };
                let selectable = group.terminal;
                let children = group.into_nodes(metadata_type, &name);
                MetadataNode {
                    name,
                    display_name: segment,
                    metadata_type: metadata_type.to_string(),
                    selectable,
                    children,
                }
            })
            .collect()
    }
}
