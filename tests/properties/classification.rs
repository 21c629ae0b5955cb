//! Property tests for the path classifier.

use proptest::prelude::*;

use sfpack::classify_path;

/// Folder types exercised against arbitrary paths
const FOLDER_TYPES: &[&str] = &[
    "ApexClass",
    "ApexTrigger",
    "ApexPage",
    "StaticResource",
    "CustomObject",
    "CustomLabels",
    "Workflow",
    "Report",
];

fn path_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}")
        .unwrap()
        .prop_filter("segments must not be hidden", |s| !s.starts_with('.'))
}

fn nested_path() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(path_segment(), 1..=4)
}

fn file_stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Classification never panics, whatever bytes the walker
    /// hands it.
    #[test]
    fn property_classify_never_panics(
        path in "(?s).{0,256}"
    ) {
        for folder_type in FOLDER_TYPES {
            let _ = classify_path(&path, folder_type);
        }
    }

    /// PROPERTY: A classified component always has a non-empty type and name.
    #[test]
    fn property_classified_records_are_never_empty(
        path in "(?s).{0,256}"
    ) {
        for folder_type in FOLDER_TYPES {
            if let Some(record) = classify_path(&path, folder_type) {
                prop_assert!(!record.metadata_type.is_empty());
                prop_assert!(!record.name.is_empty());
            }
        }
    }

    /// PROPERTY: Separator style does not change the outcome. The same
    /// segments joined with `/` or `\` classify identically.
    #[test]
    fn property_separator_style_is_irrelevant(
        segments in nested_path()
    ) {
        let forward = segments.join("/");
        let backward = segments.join("\\");
        for folder_type in FOLDER_TYPES {
            prop_assert_eq!(
                classify_path(&forward, folder_type),
                classify_path(&backward, folder_type)
            );
        }
    }

    /// PROPERTY: A source file and its sidecar always collapse to the same
    /// component.
    #[test]
    fn property_sidecar_collapses_to_source_name(
        stem in file_stem()
    ) {
        let source = classify_path(&format!("{stem}.cls"), "ApexClass");
        let dashed = classify_path(&format!("{stem}.cls-meta.xml"), "ApexClass");
        let dotted = classify_path(&format!("{stem}.cls.meta.xml"), "ApexClass");
        prop_assert_eq!(source.clone(), dashed);
        prop_assert_eq!(source, dotted);
    }

    /// PROPERTY: Types that don't keep folder structure never produce
    /// path-shaped names, however deep the file sits.
    #[test]
    fn property_flat_types_produce_flat_names(
        segments in nested_path()
    ) {
        let path = format!("{}.cls", segments.join("/"));
        if let Some(record) = classify_path(&path, "ApexClass") {
            prop_assert!(!record.name.contains('/'));
            prop_assert!(!record.name.contains('\\'));
        }
    }

    /// PROPERTY: Whatever lands under a labels folder, the component is the
    /// single org-wide CustomLabels entry.
    #[test]
    fn property_labels_collapse_to_one_component(
        segments in nested_path()
    ) {
        let path = segments.join("/");
        if let Some(record) = classify_path(&path, "CustomLabels") {
            prop_assert_eq!(record.name, "CustomLabels");
        }
    }
}
