//! Prompt tree scan errors

use std::path::Path;

use super::PromptKitError;

/// Creates a root not found error
pub fn root_not_found(path: &Path) -> PromptKitError {
    PromptKitError::RootNotFound {
        path: path.display().to_string(),
    }
}

/// Creates an invalid pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> PromptKitError {
    PromptKitError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

