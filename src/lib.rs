//! prompt-kit - prompt library tooling
//!
//! Loads prompt documents (markdown with YAML front matter) and validates
//! their metadata, one file at a time or across a whole prompt tree.

pub mod config;
pub mod document;
pub mod error;
pub mod hook;
pub mod validate;
