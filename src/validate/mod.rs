//! Front matter validation for prompt documents
//!
//! Rules are applied independently and every violation is reported:
//! - `id`, `owner` and `role` must all be present
//! - `id` must carry a version marker such as `my-prompt.v1`

mod scan;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::document::{Document, Metadata, get_str, string_keys};

pub use scan::{ScanReport, prompt_files, scan, validate_file};

/// Keys every prompt must define
pub const REQUIRED_FIELDS: &[&str] = &["id", "owner", "role"];

/// Substring the `id` must contain
pub const VERSION_MARKER: &str = ".v";

/// One problem found in one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: PathBuf,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Check metadata against the rule set, returning one message per violated rule
pub fn validate_metadata(metadata: &Metadata) -> Vec<String> {
    let mut messages = Vec::new();

    let keys: Vec<&str> = string_keys(metadata).collect();
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !keys.contains(field))
        .collect();
    if !missing.is_empty() {
        messages.push(format!("missing required fields: {}", missing.join(", ")));
    }

    if metadata.contains_key("id")
        && !get_str(metadata, "id").is_some_and(|id| id.contains(VERSION_MARKER))
    {
        messages.push(format!(
            "id should contain a semantic version suffix like '{VERSION_MARKER}1'"
        ));
    }

    messages
}

/// Validate a parsed document
pub fn validate_document(document: &Document) -> Vec<ValidationIssue> {
    issues_for(&document.path, validate_metadata(&document.metadata))
}

fn issues_for(path: &Path, messages: Vec<String>) -> Vec<ValidationIssue> {
    messages
        .into_iter()
        .map(|message| ValidationIssue::new(path, message))
        .collect()
}
