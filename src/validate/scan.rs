//! Batch validation of a prompt tree
//!
//! Every prompt file under the root is read and validated. Read and parse failures
//! become issues for that file, so one broken prompt never stops the scan.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use super::{ValidationIssue, issues_for, validate_document};
use crate::config::{Config, INDEX_FILE_NAME};
use crate::document::Document;
use crate::error::{self, PromptKitError, Result};

/// Outcome of scanning a prompt tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of prompt files checked
    pub checked: usize,

    /// Issues across all files, in scan order
    pub issues: Vec<ValidationIssue>,
}

impl ScanReport {
    /// True when no file had any issue
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Scan and validate every prompt file under `config.root`
pub fn scan(config: &Config) -> Result<ScanReport> {
    let files = prompt_files(config)?;
    let issues: Vec<ValidationIssue> = files.iter().flat_map(|f| validate_file(f)).collect();

    info!(
        "Checked {} prompt files under {}, {} issues",
        files.len(),
        config.root().display(),
        issues.len()
    );

    Ok(ScanReport {
        checked: files.len(),
        issues,
    })
}

/// Read, parse and validate one prompt file
pub fn validate_file(path: &Path) -> Vec<ValidationIssue> {
    match Document::read(path) {
        Ok(document) => validate_document(&document),
        Err(err) => issues_for(path, vec![issue_message(&err)]),
    }
}

/// Prompt files under the root, sorted by file name within each directory
///
/// Skips index files (`README.md` in any case) and anything below an excluded
/// top-level directory. Symlinked directories are not descended into; symlinked
/// files are included. Unreadable entries are logged and skipped.
pub fn prompt_files(config: &Config) -> Result<Vec<PathBuf>> {
    let root = config.root();
    if !root.is_dir() {
        return Err(error::scan::root_not_found(root));
    }
    let glob = Glob::new(&config.pattern)
        .map_err(|e| error::scan::invalid_pattern(&config.pattern, e.to_string()))?;

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_top_level(config, entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if !is_file(&entry) {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if is_index_file(relative) {
            debug!("Skipping index file {}", entry.path().display());
            continue;
        }
        let candidate = to_forward_slashes(relative);
        if glob.matched(&CandidatePath::from(candidate.as_str())).is_some() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_excluded_top_level(config: &Config, entry: &DirEntry) -> bool {
    let excluded = entry.depth() == 1
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_excluded_dir(name));
    if excluded {
        debug!("Skipping excluded directory {}", entry.path().display());
    }
    excluded
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_index_file(relative: &Path) -> bool {
    relative
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.eq_ignore_ascii_case(INDEX_FILE_NAME))
}

/// Normalize to forward slashes so patterns match the same way on every platform
fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Message for a file that could not be read or parsed; the path is carried by the issue
fn issue_message(err: &PromptKitError) -> String {
    match err {
        PromptKitError::MalformedDocument { reason, .. } => reason.clone(),
        PromptKitError::MalformedMetadata { reason, .. } => {
            format!("invalid YAML front matter: {reason}")
        }
        PromptKitError::FileReadFailed { reason, .. } => format!("failed to read file: {reason}"),
        other => other.to_string(),
    }
}
