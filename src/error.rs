//! Error types.
//!
//! Fatal errors are grouped per concern and wrapped by [`Error`]. Two kinds
//! are never fatal: a [`ParseWarning`] skips one import line and an
//! [`OtpError`] drops one record from a lookup.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Secret store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Nothing usable to load: missing, empty or corrupt backing data.
    #[error("secret store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write secret store: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("failed to read secret store: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("unable to determine data directory")]
    NoDataDir,

    #[error("keychain access denied")]
    KeychainAccessDenied,

    #[error("keychain error: {0}")]
    KeychainError(String),
}

/// Code generation errors, always attributable to one record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("invalid secret for {label}: {reason}")]
    InvalidSecret { label: String, reason: String },

    #[error("invalid parameters for {label}: {reason}")]
    InvalidParameters { label: String, reason: String },
}

/// A provisioning line that could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to parse the line ({reason}): {line}")]
pub struct ParseWarning {
    /// The offending line, as read.
    pub line: String,
    /// Short description of what was wrong.
    pub reason: String,
}

impl ParseWarning {
    pub fn new(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
