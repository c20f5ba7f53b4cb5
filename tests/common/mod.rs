//! Common test utilities for prompt-kit integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Front matter that passes every rule
pub const VALID_PROMPT: &str = "---\nid: review.v1\nrole: system\nowner: platform\n---\nReview the diff.\n";

/// A temporary directory holding a `prompts` tree
pub struct TestLibrary {
    /// Temporary directory
    pub temp: TempDir,
    /// Working directory for commands (parent of `prompts`)
    pub path: PathBuf,
}

impl TestLibrary {
    /// Create an empty library with a `prompts` directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("prompts")).expect("Failed to create prompts directory");
        Self { temp, path }
    }

    /// Prompt root
    pub fn root(&self) -> PathBuf {
        self.path.join("prompts")
    }

    /// Write a file relative to the prompt root
    pub fn write_prompt(&self, path: &str, content: &str) {
        write_file(&self.root().join(path), content);
    }

    /// Write a file relative to the library directory
    pub fn write_file(&self, path: &str, content: &str) {
        write_file(&self.path.join(path), content);
    }

    /// Command running the real binary from the library directory
    pub fn cmd(&self) -> Command {
        let mut cmd = prompt_kit_cmd();
        cmd.current_dir(&self.path).env_remove("PROMPT_KIT_ROOT");
        cmd
    }
}

impl Default for TestLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the prompt-kit binary
#[allow(deprecated)]
pub fn prompt_kit_cmd() -> Command {
    Command::cargo_bin("prompt-kit").expect("prompt-kit binary should build")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
