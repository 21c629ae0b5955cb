//! Property tests for hierarchy organization.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use sfpack::models::MetadataMap;
use sfpack::{organize, MetadataNode};

fn name_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_]{1,8}").unwrap()
}

fn slash_name() -> impl Strategy<Value = String> {
    proptest::collection::vec(name_segment(), 1..=3).prop_map(|segments| segments.join("/"))
}

fn name_set() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(slash_name(), 1..12)
}

fn metadata_map(metadata_type: &str, names: &BTreeSet<String>) -> MetadataMap {
    let mut map = BTreeMap::new();
    map.insert(
        metadata_type.to_string(),
        names.iter().cloned().collect::<Vec<_>>(),
    );
    map
}

fn collect_selectable(node: &MetadataNode, into: &mut BTreeSet<String>) {
    if node.selectable {
        into.insert(node.name.clone());
    }
    for child in &node.children {
        collect_selectable(child, into);
    }
}

/// Checks that every descendant extends its parent's name by one segment.
fn subtree_names_chain(node: &MetadataNode) -> bool {
    node.children.iter().all(|child| {
        child.name == format!("{}/{}", node.name, child.display_name)
            && subtree_names_chain(child)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Organization conserves components. The selectable nodes of
    /// a grouped tree are exactly the discovered names, no more, no fewer.
    #[test]
    fn property_selectable_names_equal_input(
        names in name_set()
    ) {
        let tree = organize(&metadata_map("ApexClass", &names));
        let root = &tree["ApexClass"];

        let mut selectable = BTreeSet::new();
        collect_selectable(root, &mut selectable);

        prop_assert_eq!(selectable, names);
    }

    /// PROPERTY: Type roots are containers, never selectable components.
    #[test]
    fn property_roots_are_never_selectable(
        names in name_set()
    ) {
        for metadata_type in ["ApexClass", "CustomObject", "CustomTab", "Workflow"] {
            let tree = organize(&metadata_map(metadata_type, &names));
            prop_assert!(!tree[metadata_type].selectable);
        }
    }

    /// PROPERTY: Non-hierarchical types stay flat. One selectable leaf per
    /// name, even when the name carries slashes.
    #[test]
    fn property_flat_types_have_one_leaf_per_name(
        names in name_set()
    ) {
        let tree = organize(&metadata_map("CustomTab", &names));
        let root = &tree["CustomTab"];

        prop_assert_eq!(root.children.len(), names.len());
        for leaf in &root.children {
            prop_assert!(leaf.selectable);
            prop_assert!(leaf.children.is_empty());
            prop_assert_eq!(&leaf.name, &leaf.display_name);
        }
    }

    /// PROPERTY: In a grouped tree, every node's name is the cumulative path
    /// of display names from the root's children down.
    #[test]
    fn property_child_names_are_prefixed_by_parent(
        names in name_set()
    ) {
        let tree = organize(&metadata_map("ApexClass", &names));
        let root = &tree["ApexClass"];

        for child in &root.children {
            prop_assert_eq!(&child.name, &child.display_name);
            prop_assert!(subtree_names_chain(child));
        }
    }

    /// PROPERTY: Organization never panics, whatever names discovery feeds it.
    #[test]
    fn property_organize_never_panics(
        names in proptest::collection::vec("(?s).{0,64}", 0..8)
    ) {
        let mut map = BTreeMap::new();
        map.insert("ApexClass".to_string(), names);
        let tree = organize(&map);
        prop_assert!(tree.contains_key("ApexClass"));
    }
}
