//! Prompt documents: YAML front matter followed by a markdown body
//!
//! ```text
//! ---
//! id: my-prompt.v1
//! role: system
//! owner: platform
//! ---
//! Body text
//! ```

mod frontmatter;

use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_yaml::Value;

use crate::config::Config;
use crate::error::{self, Result};

pub use frontmatter::{
    FrontMatterError, Metadata, MetadataError, decode_metadata, get_str, split_front_matter,
    string_keys,
};

/// A parsed prompt document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Where the document was read from
    pub path: PathBuf,

    /// Decoded front matter, extra keys included
    pub metadata: Metadata,

    /// Content after the closing delimiter, leading newlines stripped
    pub body: String,
}

impl Document {
    /// Parse raw prompt text read from `path`
    pub fn parse(path: impl Into<PathBuf>, raw: &str) -> Result<Self> {
        let path = path.into();
        let (metadata_text, body) =
            split_front_matter(raw).map_err(|e| error::document::malformed(&path, e.to_string()))?;
        let metadata = decode_metadata(metadata_text)
            .map_err(|e| error::document::malformed_metadata(&path, e.to_string()))?;

        Ok(Self {
            body: body.to_string(),
            metadata,
            path,
        })
    }

    /// Read and parse the file at `path`
    pub fn read(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| error::fs::read_failed(path, e.to_string()))?;
        Self::parse(path, &raw)
    }

    /// Raw metadata value for `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Metadata value for `key` rendered as a string, for scalar values
    pub fn get_str(&self, key: &str) -> Option<String> {
        get_str(&self.metadata, key)
    }
}

/// Loads prompt documents by path relative to a prompt root
#[derive(Debug, Clone)]
pub struct PromptLoader {
    root: PathBuf,
}

impl PromptLoader {
    /// Create a loader for the root in `config`
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.root.clone(),
        }
    }

    /// Load the prompt at `relative_path` under the root
    ///
    /// Fails with `NotFound` when the path is not a regular file, and with
    /// `MalformedDocument` / `MalformedMetadata` when it cannot be parsed.
    pub fn load(&self, relative_path: impl AsRef<Path>) -> Result<Document> {
        let joined = self.root.join(relative_path.as_ref());
        if !joined.is_file() {
            return Err(error::document::not_found(&joined));
        }
        let path = dunce::canonicalize(&joined)
            .map_err(|e| error::fs::read_failed(&joined, e.to_string()))?;
        debug!("Loading prompt {}", path.display());
        Document::read(&path)
    }
}
