//! Loading a single prompt through the CLI

mod common;

use common::{TestLibrary, VALID_PROMPT};
use predicates::prelude::*;

#[test]
fn test_show_prints_metadata_and_body() {
    let library = TestLibrary::new();
    library.write_prompt("system/review.md", VALID_PROMPT);

    library
        .cmd()
        .args(["show", "system/review.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id: review.v1"))
        .stdout(predicate::str::contains("owner: platform"))
        .stdout(predicate::str::contains("Review the diff."));
}

#[test]
fn test_show_json() {
    let library = TestLibrary::new();
    library.write_prompt(
        "system/review.md",
        "---\nid: review.v1\nrole: system\nowner: platform\ntags: [code]\n---\n\nBody\n",
    );

    let output = library
        .cmd()
        .args(["show", "system/review.md", "--json"])
        .output()
        .expect("Failed to run prompt-kit");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("show --json should print JSON");
    assert_eq!(json["metadata"]["id"], "review.v1");
    assert_eq!(json["metadata"]["tags"][0], "code");
    assert_eq!(json["body"], "Body\n");
}

#[test]
fn test_show_missing_prompt() {
    let library = TestLibrary::new();

    library
        .cmd()
        .args(["show", "system/missing.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Prompt not found"));
}

#[test]
fn test_show_malformed_prompt_fails() {
    let library = TestLibrary::new();
    library.write_prompt("bad.md", "---\nid: bad.v1\n");

    library
        .cmd()
        .args(["show", "bad.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("front matter must be followed by"));
}

#[test]
fn test_show_bad_yaml_fails() {
    let library = TestLibrary::new();
    library.write_prompt("bad.md", "---\nid: [bad\n---\nbody");

    library
        .cmd()
        .args(["show", "bad.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid YAML front matter"));
}
