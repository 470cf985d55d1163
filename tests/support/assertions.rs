//! Test assertion helpers.

use std::process::Output;

use serde_json::Value;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parse stdout as a JSON envelope.
pub fn json(output: &Output) -> Value {
    let out = stdout(output);
    serde_json::from_str(&out).unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, out))
}

/// The `items` array of a JSON envelope.
pub fn items(output: &Output) -> Vec<Value> {
    json(output)["items"]
        .as_array()
        .cloned()
        .unwrap_or_else(|| panic!("envelope has no items array: {}", stdout(output)))
}

/// Assert a code is made of exactly `digits` ASCII digits.
pub fn assert_code(code: &Value, digits: usize) {
    let code = code.as_str().expect("code should be a string");
    assert_eq!(code.len(), digits, "unexpected code length: {}", code);
    assert!(
        code.chars().all(|c| c.is_ascii_digit()),
        "code is not numeric: {}",
        code
    );
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert stdout does NOT contain a string.
pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(excluded),
        "stdout should not contain '{}', got: {}",
        excluded,
        out
    );
}
