#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz .forceignore pattern compilation - this should never panic
        let root = Path::new("/project");
        let source = Path::new("/project/.forceignore");
        if let Ok(ignore) = sfpack::ForceIgnore::from_content(root, source, content) {
            let _ = ignore.is_ignored(Path::new("force-app/main/default/classes/A.cls"), false);
        }
    }
});
