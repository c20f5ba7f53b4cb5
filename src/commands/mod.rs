//! Command implementations for the prompt-kit CLI

pub mod completions;
pub mod hook_message;
pub mod show;
pub mod validate;
