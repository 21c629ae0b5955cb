#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to convert bytes to a valid UTF-8 string
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz path classification across every folder type
        // This shouldn't panic regardless of input
        for folder_type in [
            "ApexClass",
            "ApexTrigger",
            "AuraDefinitionBundle",
            "CustomObject",
            "CustomLabels",
            "Workflow",
            "Report",
        ] {
            let _ = sfpack::classify_path(content, folder_type);
        }
    }
});
