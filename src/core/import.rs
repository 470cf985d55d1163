//! Import of provisioning-URI exports.
//!
//! Reads an export file, parses each line and rebuilds the store from the
//! records that parsed. Bad lines are reported, never fatal.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::core::store::{Backend, SecretStore};
use crate::core::uri;
use crate::error::{Error, ParseWarning, Result};

/// Outcome of an import.
#[derive(Debug)]
pub struct Report {
    /// The store as written.
    pub store: SecretStore,
    /// Lines that were skipped, in file order.
    pub warnings: Vec<ParseWarning>,
}

impl Report {
    /// Number of records written.
    pub fn imported(&self) -> usize {
        self.store.len()
    }
}

/// Import an export file, replacing the store held by `backend`.
///
/// # Arguments
///
/// * `path` - Export file, one `otpauth://` URI per line
/// * `backend` - Where the rebuilt store is saved
///
/// # Errors
///
/// Returns `Error::SourceNotFound` if `path` does not exist, or a store
/// error if the backend write fails.
pub fn import(path: &Path, backend: &dyn Backend) -> Result<Report> {
    debug!(path = %path.display(), "importing");

    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    import_str(&contents, backend)
}

/// Import export text already in memory.
///
/// # Errors
///
/// Returns a store error if the backend write fails.
pub fn import_str(contents: &str, backend: &dyn Backend) -> Result<Report> {
    let batch = uri::parse_batch(contents);
    let store = SecretStore::rebuild(backend, batch.records)?;

    info!(
        imported = store.len(),
        skipped = batch.warnings.len(),
        "import finished"
    );
    Ok(Report {
        store,
        warnings: batch.warnings,
    })
}
