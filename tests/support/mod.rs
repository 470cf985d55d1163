//! Test support utilities for ente-totp integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir, and the store path
/// points inside the working dir. No process-global state is mutated, so
/// tests can safely run in parallel.
pub struct Test {
    /// Temporary directory holding export files and the store
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment whose store was imported from `export`.
    pub fn imported(export: &str) -> Self {
        let t = Self::new();
        let file = t.write_export("export.txt", export);
        let output = t.import(&file);
        assert!(
            output.status.success(),
            "Failed to import: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Path of the store file used by every command of this environment.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("db.json")
    }

    /// Write an export file into the working dir.
    pub fn write_export(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write export file");
        path
    }
}
