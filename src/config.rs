//! Prompt library configuration
//!
//! The prompt root is passed explicitly to the loader and the scanner so
//! callers (and tests) can point them at any directory.

use std::path::{Path, PathBuf};

/// Default prompt root, relative to the working directory
pub const DEFAULT_ROOT: &str = "prompts";

/// Default pattern for prompt files, matched against root-relative paths
pub const DEFAULT_PATTERN: &str = "**/*.md";

/// Top-level directories holding fixtures, eval data and templates rather than prompts
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["evals", "fixtures", "templates"];

/// Index file name skipped by the scan (compared case-insensitively)
pub const INDEX_FILE_NAME: &str = "readme.md";

/// Environment variable overriding the prompt root
pub const ROOT_ENV_VAR: &str = "PROMPT_KIT_ROOT";

/// Where prompts live and which files under the root count as prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt root directory
    pub root: PathBuf,

    /// Glob pattern selecting prompt files (e.g. `**/*.md`)
    pub pattern: String,

    /// Top-level directory names excluded from the scan
    pub excluded_dirs: Vec<String>,
}

impl Config {
    /// Default configuration rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Replace the file pattern
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Prompt root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `name` is an excluded top-level directory
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            pattern: DEFAULT_PATTERN.to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|d| (*d).to_string())
                .collect(),
        }
    }
}
