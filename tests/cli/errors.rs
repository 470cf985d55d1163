//! Tests for CLI flags, help and argument errors.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "import");
    assert_stdout_contains(&output, "get");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_import_requires_file() {
    let t = Test::new();

    let output = t.cmd().arg("import").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_format_rejected() {
    let t = Test::imported(SAMPLE_EXPORT);

    let output = t.get_as("acme", "xml");
    assert_failure(&output);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let t = Test::imported(SAMPLE_EXPORT);

    let output = t.cmd().args(["--verbose", "get", "acme"]).output().unwrap();
    assert_success(&output);
    // stdout stays parseable with debug logging on
    assert_eq!(items(&output).len(), 1);
    assert!(!stderr(&output).is_empty());
}

#[test]
fn test_completions_generate() {
    let t = Test::new();

    for shell in ["bash", "zsh", "fish", "power-shell"] {
        let output = t.cmd().args(["completions", shell]).output().unwrap();
        assert_success(&output);
        assert_stdout_contains(&output, "ente-totp");
    }
}

#[test]
fn test_completions_offer_format_values() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "launcher");
    assert_stdout_contains(&output, "--title-with-account");
}
