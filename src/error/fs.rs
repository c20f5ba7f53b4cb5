//! File system errors

use std::path::Path;

use super::PromptKitError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl Into<String>) -> PromptKitError {
    PromptKitError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> PromptKitError {
    PromptKitError::IoError {
        message: message.into(),
    }
}
