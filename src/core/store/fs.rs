//! Filesystem-backed store.
//!
//! Keeps the serialized store as a single JSON file, by default
//! `~/.local/share/ente-totp/db.json`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Backend;
use crate::core::constants::{APP_DIR, STORE_FILE};
use crate::error::{Result, StoreError};

/// Single-file JSON backend.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
}

impl Filesystem {
    /// Backend writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location under the home directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory is unknown.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(StoreError::NoDataDir)?;
        Ok(home
            .join(".local")
            .join("share")
            .join(APP_DIR)
            .join(STORE_FILE))
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| STORE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Backend for Filesystem {
    fn save(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(StoreError::WriteFailed)?;
        }

        // Write next to the target and rename so readers never see a
        // half-written store.
        let tmp = self.temp_path();
        fs::write(&tmp, blob).map_err(StoreError::WriteFailed)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(StoreError::WriteFailed)?;
        }

        fs::rename(&tmp, &self.path).map_err(StoreError::WriteFailed)?;
        debug!(path = %self.path.display(), bytes = blob.len(), "store written");
        Ok(())
    }

    fn load(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(StoreError::Unavailable(format!(
                "no secret store at {} (run import first)",
                self.path.display()
            ))
            .into());
        }
        let blob = fs::read_to_string(&self.path).map_err(StoreError::ReadFailed)?;
        debug!(path = %self.path.display(), bytes = blob.len(), "store read");
        Ok(blob)
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
