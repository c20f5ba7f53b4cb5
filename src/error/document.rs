//! Prompt document errors

use std::path::Path;

use super::PromptKitError;

/// Creates a prompt not found error
pub fn not_found(path: &Path) -> PromptKitError {
    PromptKitError::NotFound {
        path: path.display().to_string(),
    }
}

/// Creates a malformed document error (wrong shape)
pub fn malformed(path: &Path, reason: impl Into<String>) -> PromptKitError {
    PromptKitError::MalformedDocument {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a malformed metadata error (bad YAML)
pub fn malformed_metadata(path: &Path, reason: impl Into<String>) -> PromptKitError {
    PromptKitError::MalformedMetadata {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
