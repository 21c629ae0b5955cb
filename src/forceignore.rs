//! `.forceignore` support
//!
//! DX projects exclude source paths from tooling via a `.forceignore` file
//! at the project root, using gitignore semantics. Patterns are matched
//! against project-relative paths during discovery.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// File name of the ignore file at the project root
pub const FORCEIGNORE_FILE: &str = ".forceignore";

/// Maximum file size for `.forceignore` (64KB)
const MAX_FILE_SIZE: u64 = 65536;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Patterns loaded from a project's `.forceignore` file.
///
/// Uses the `ignore` crate for gitignore-compatible pattern matching.
#[derive(Debug)]
pub struct ForceIgnore {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for ForceIgnore {
    fn default() -> Self {
        Self::empty()
    }
}

impl ForceIgnore {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        let builder = GitignoreBuilder::new("");
        let matcher = builder
            .build()
            .expect("empty gitignore should always build");
        Self {
            matcher,
            pattern_count: 0,
        }
    }

    /// Load patterns from `.forceignore` in the given project root.
    ///
    /// Returns `Ok(empty)` if the file doesn't exist. Returns `Err` if the
    /// file is too large, has too many patterns, or contains invalid syntax.
    pub fn load(project_root: &Path) -> Result<Self, ForceIgnoreError> {
        let ignore_path = project_root.join(FORCEIGNORE_FILE);

        if !ignore_path.exists() {
            return Ok(Self::empty());
        }

        let metadata = fs::metadata(&ignore_path).map_err(ForceIgnoreError::Io)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(ForceIgnoreError::FileTooLarge {
                path: ignore_path,
                size: metadata.len(),
                limit: MAX_FILE_SIZE,
            });
        }

        let content = fs::read_to_string(&ignore_path).map_err(ForceIgnoreError::Io)?;
        Self::from_content(project_root, &ignore_path, &content)
    }

    /// Parse patterns from string content (for testing).
    pub fn from_content(
        root: &Path,
        source_path: &Path,
        content: &str,
    ) -> Result<Self, ForceIgnoreError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(ForceIgnoreError::TooManyPatterns {
                    path: source_path.to_path_buf(),
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(Some(source_path.to_path_buf()), line) {
                return Err(ForceIgnoreError::InvalidPattern {
                    path: source_path.to_path_buf(),
                    line: line_num + 1,
                    pattern: line.to_string(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| ForceIgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a project-relative path should be excluded from discovery.
    ///
    /// `is_dir` should be true if the path is a directory (bundle folders).
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when loading `.forceignore`.
#[derive(Debug)]
pub enum ForceIgnoreError {
    /// The file exceeds the size limit.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },
    /// Too many patterns in the file.
    TooManyPatterns {
        path: PathBuf,
        count: usize,
        limit: usize,
    },
    /// A pattern has invalid syntax.
    InvalidPattern {
        path: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },
    /// Failed to build the gitignore matcher.
    BuildFailed(String),
    /// IO error reading the file.
    Io(std::io::Error),
}

impl fmt::Display for ForceIgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileTooLarge { path, size, limit } => {
                write!(
                    f,
                    ".forceignore exceeds {}KB limit ({} bytes): {}",
                    limit / 1024,
                    size,
                    path.display()
                )
            }
            Self::TooManyPatterns { path, count, limit } => {
                write!(
                    f,
                    ".forceignore has {} patterns, exceeds {} limit: {}",
                    count,
                    limit,
                    path.display()
                )
            }
            Self::InvalidPattern {
                path,
                line,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "invalid pattern at {}:{}: '{}' - {}",
                    path.display(),
                    line,
                    pattern,
                    message
                )
            }
            Self::BuildFailed(msg) => write!(f, "failed to build ignore matcher: {}", msg),
            Self::Io(e) => write!(f, "IO error reading .forceignore: {}", e),
        }
    }
}

impl std::error::Error for ForceIgnoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
