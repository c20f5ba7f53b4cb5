//! Error types and handling for prompt-kit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`document`]: Loading and parsing a single prompt document
//! - [`scan`]: Walking a prompt tree
//! - [`fs`]: File system errors

pub mod document;
pub mod fs;
pub mod scan;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for prompt-kit operations
#[derive(Error, Diagnostic, Debug)]
pub enum PromptKitError {
    // Document errors
    #[error("Prompt not found: {path}")]
    #[diagnostic(
        code(prompt_kit::document::not_found),
        help("Paths are resolved relative to the prompt root (--root or PROMPT_KIT_ROOT)")
    )]
    NotFound { path: String },

    #[error("Prompt {path} is malformed: {reason}")]
    #[diagnostic(
        code(prompt_kit::document::malformed),
        help("Prompt files must start with a '---' line and close the front matter with another '---' line")
    )]
    MalformedDocument { path: String, reason: String },

    #[error("Prompt {path} has invalid YAML front matter: {reason}")]
    #[diagnostic(code(prompt_kit::document::malformed_metadata))]
    MalformedMetadata { path: String, reason: String },

    // Scan errors
    #[error("Prompt root not found: {path}")]
    #[diagnostic(
        code(prompt_kit::scan::root_not_found),
        help("Run from the directory containing 'prompts' or pass --root")
    )]
    RootNotFound { path: String },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(prompt_kit::scan::invalid_pattern),
        help("Patterns use glob syntax, e.g. '**/*.md'")
    )]
    InvalidPattern { pattern: String, reason: String },

    #[error("Validation found {count} issue(s)")]
    #[diagnostic(code(prompt_kit::validate::failed))]
    ValidationFailed { count: usize },

    // Hook errors
    #[error("Invalid hook input: {reason}")]
    #[diagnostic(
        code(prompt_kit::hook::invalid_input),
        help("Hook input must be a JSON object on stdin")
    )]
    InvalidHookInput { reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(prompt_kit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(prompt_kit::fs::io_error))]
    IoError { message: String },

    #[error("Serialization failed: {reason}")]
    #[diagnostic(code(prompt_kit::serialize::failed))]
    SerializationFailed { reason: String },
}

impl From<serde_yaml::Error> for PromptKitError {
    fn from(err: serde_yaml::Error) -> Self {
        PromptKitError::SerializationFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PromptKitError {
    fn from(err: serde_json::Error) -> Self {
        PromptKitError::SerializationFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PromptKitError>;
