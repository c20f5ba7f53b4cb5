//! Split prompt text into YAML front matter and body, and decode the front matter.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Decoded front matter: string keys to arbitrary YAML values
pub type Metadata = Mapping;

/// Opening delimiter; must be the very first line
const OPENING: &str = "---\n";

/// Closing delimiter; the first occurrence ends the front matter
const CLOSING: &str = "\n---\n";

/// Structural problems with a prompt's delimiters
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterError {
    #[error("missing front matter header")]
    MissingHeader,

    #[error("front matter must be followed by '---' delimiter")]
    MissingClosingDelimiter,
}

/// Split raw text into `(metadata_text, body)`.
///
/// The text must start with `---\n`. The front matter ends at the first `\n---\n`,
/// even when that line sits inside what would otherwise be a YAML value. Leading
/// dashes and newlines are stripped from the metadata text and leading newlines
/// from the body; trailing content is kept verbatim.
pub fn split_front_matter(raw: &str) -> Result<(&str, &str), FrontMatterError> {
    if !raw.starts_with(OPENING) {
        return Err(FrontMatterError::MissingHeader);
    }
    let end = raw
        .find(CLOSING)
        .ok_or(FrontMatterError::MissingClosingDelimiter)?;

    let metadata = raw[..end].trim_start_matches(['-', '\n']);
    let body = raw[end + CLOSING.len()..].trim_start_matches('\n');
    Ok((metadata, body))
}

/// Front matter that is present but cannot be used as metadata
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("front matter must be a YAML mapping, found {0}")]
    NotMapping(&'static str),
}

/// Decode front matter text into a mapping.
///
/// Empty, whitespace-only and `null` front matter decode to an empty mapping.
/// A top-level value that is not a mapping is rejected.
pub fn decode_metadata(text: &str) -> Result<Metadata, MetadataError> {
    if text.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(text)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(MetadataError::NotMapping(value_kind(&other))),
    }
}

/// Get a top-level value rendered as a string (strings, numbers and booleans only).
pub fn get_str(metadata: &Metadata, key: &str) -> Option<String> {
    match metadata.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Top-level keys that are strings
pub fn string_keys(metadata: &Metadata) -> impl Iterator<Item = &str> {
    metadata.keys().filter_map(Value::as_str)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_well_formed() {
        let (meta, body) = split_front_matter("---\nid: a.v1\n---\nHello").unwrap();
        assert_eq!(meta, "id: a.v1");
        assert_eq!(body, "Hello");
    }

    #[test]
    fn split_strips_leading_newlines_from_body_only() {
        let (_, body) = split_front_matter("---\nid: a\n---\n\n\nBody\n\n").unwrap();
        assert_eq!(body, "Body\n\n");
    }

    #[test]
    fn split_keeps_leading_spaces_in_body() {
        let (_, body) = split_front_matter("---\nid: a\n---\n\n    indented").unwrap();
        assert_eq!(body, "    indented");
    }

    #[test]
    fn split_missing_header() {
        assert_eq!(
            split_front_matter("No front matter"),
            Err(FrontMatterError::MissingHeader)
        );
    }

    #[test]
    fn split_header_needs_newline() {
        assert_eq!(
            split_front_matter("--- \nid: a\n---\n"),
            Err(FrontMatterError::MissingHeader)
        );
        assert_eq!(
            split_front_matter("---"),
            Err(FrontMatterError::MissingHeader)
        );
    }

    #[test]
    fn split_missing_closing_delimiter() {
        assert_eq!(
            split_front_matter("---\nid: a\nrole: r\n"),
            Err(FrontMatterError::MissingClosingDelimiter)
        );
    }

    #[test]
    fn split_closing_delimiter_at_end_of_file_needs_newline() {
        assert_eq!(
            split_front_matter("---\nid: a\n---"),
            Err(FrontMatterError::MissingClosingDelimiter)
        );
    }

    #[test]
    fn split_empty_front_matter() {
        let (meta, body) = split_front_matter("---\n---\nbody").unwrap();
        assert_eq!(meta, "");
        assert_eq!(body, "body");
    }

    #[test]
    fn split_uses_first_closing_delimiter() {
        let raw = "---\nid: a\n---\nsecond: block\n---\nbody";
        let (meta, body) = split_front_matter(raw).unwrap();
        assert_eq!(meta, "id: a");
        assert_eq!(body, "second: block\n---\nbody");
    }

    #[test]
    fn split_truncates_block_scalar_containing_delimiter() {
        let raw = "---\nnotes: |\n  first\n---\n  rest\n---\nbody";
        let (meta, body) = split_front_matter(raw).unwrap();
        assert_eq!(meta, "notes: |\n  first");
        assert!(body.starts_with("  rest"));
    }

    #[test]
    fn decode_mapping() {
        let meta = decode_metadata("id: a.v1\nrole: system\ntags: [x, y]\n").unwrap();
        assert_eq!(get_str(&meta, "id").as_deref(), Some("a.v1"));
        assert!(meta.get("tags").is_some_and(Value::is_sequence));
    }

    #[test]
    fn decode_empty_and_null() {
        assert!(decode_metadata("").unwrap().is_empty());
        assert!(decode_metadata("  \n\t\n").unwrap().is_empty());
        assert!(decode_metadata("~").unwrap().is_empty());
    }

    #[test]
    fn decode_invalid_yaml() {
        assert!(matches!(
            decode_metadata("id: [unclosed"),
            Err(MetadataError::Yaml(_))
        ));
    }

    #[test]
    fn decode_rejects_duplicate_keys() {
        let err = decode_metadata("id: a.v1\nowner: x\nowner: y\n").unwrap_err();
        assert!(matches!(err, MetadataError::Yaml(_)));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn decode_rejects_non_mapping() {
        let err = decode_metadata("- a\n- b").unwrap_err();
        assert!(matches!(err, MetadataError::NotMapping("a sequence")));
        assert!(err.to_string().contains("a sequence"));
    }

    #[test]
    fn get_str_renders_scalars() {
        let meta = decode_metadata("n: 3\nb: true\nlist: [1]\n").unwrap();
        assert_eq!(get_str(&meta, "n").as_deref(), Some("3"));
        assert_eq!(get_str(&meta, "b").as_deref(), Some("true"));
        assert_eq!(get_str(&meta, "list"), None);
        assert_eq!(get_str(&meta, "missing"), None);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let meta = decode_metadata("ID: a.v1\n").unwrap();
        assert_eq!(get_str(&meta, "id"), None);
        assert_eq!(string_keys(&meta).collect::<Vec<_>>(), vec!["ID"]);
    }
}
