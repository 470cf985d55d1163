//! Tests for `ente-totp import`.

use crate::support::*;
use std::fs;

#[test]
fn test_import_reports_entries_and_skipped_lines() {
    let t = Test::new();
    let file = t.write_export("export.txt", SAMPLE_EXPORT);

    let output = t.import(&file);
    assert_success(&output);

    let items = items(&output);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Import Successful");
    assert_eq!(
        items[0]["subtitle"],
        "Database created with 1 entries. Skipped 1 unparsable lines."
    );
    assert!(json(&output).get("error").is_none());

    // The rejected line is logged, not fatal
    assert_stderr_contains(&output, "not-a-uri");
}

#[test]
fn test_import_writes_store_file() {
    let t = Test::imported(SAMPLE_EXPORT);

    let contents = fs::read_to_string(t.store_path()).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(stored.get("Acme").is_some());
    assert!(!contents.contains("not-a-uri"));
}

#[test]
fn test_import_is_idempotent() {
    let t = Test::imported(MULTI_EXPORT);
    let first = fs::read_to_string(t.store_path()).unwrap();

    let file = t.write_export("again.txt", MULTI_EXPORT);
    assert_success(&t.import(&file));
    let second = fs::read_to_string(t.store_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_import_replaces_previous_store() {
    let t = Test::imported(MULTI_EXPORT);

    let file = t.write_export("small.txt", SAMPLE_EXPORT);
    assert_success(&t.import(&file));

    let output = t.get("github");
    assert_success(&output);
    assert!(items(&output).is_empty());
}

#[test]
fn test_import_strips_code_display_suffix() {
    let t = Test::new();
    let file = t.write_export("ente.txt", ENTE_EXPORT);

    let output = t.import(&file);
    assert_success(&output);
    assert_eq!(
        items(&output)[0]["subtitle"],
        "Database created with 1 entries."
    );

    let output = t.get("bank");
    assert_success(&output);
    let items = items(&output);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["label"], "Bank");
}

#[test]
fn test_import_missing_file_reports_failure() {
    let t = Test::new();

    let output = t.import(&t.dir.path().join("missing.txt"));
    assert_success(&output);

    let envelope = json(&output);
    assert_eq!(envelope["items"][0]["title"], "Import Failed");
    assert!(envelope["error"]
        .as_str()
        .unwrap()
        .contains("file not found"));
    assert!(!t.store_path().exists());
}

#[test]
fn test_import_missing_file_plain_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["import", "missing.txt", "--format", "plain"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
}

#[test]
fn test_import_plain_summary() {
    let t = Test::new();
    t.write_export("export.txt", SAMPLE_EXPORT);

    let output = t
        .cmd()
        .args(["import", "export.txt", "-o", "plain"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "imported 1 secrets");
    assert_stderr_contains(&output, "unable to parse the line");
}

#[test]
fn test_import_empty_file_creates_empty_store() {
    let t = Test::new();
    let file = t.write_export("empty.txt", "\n\n");

    let output = t.import(&file);
    assert_success(&output);
    assert_eq!(
        items(&output)[0]["subtitle"],
        "Database created with 0 entries."
    );

    let output = t.get("anything");
    assert_success(&output);
    assert!(items(&output).is_empty());
}
