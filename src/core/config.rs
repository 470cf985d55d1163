//! Runtime configuration.
//!
//! Built once at startup from command-line flags and their environment
//! variable fallbacks, then passed explicitly to whatever needs it.

use std::path::PathBuf;

use crate::core::format::Formatter;
use crate::core::store::{self, Backend};
use crate::error::Result;

/// Settings for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Store file location; `None` means the default under the home directory.
    pub store_path: Option<PathBuf>,
    /// Keep the store in the macOS Keychain instead of a file.
    pub use_keychain: bool,
    /// Append the account name to result titles.
    pub title_with_account: bool,
    /// Append the account name to result subtitles.
    pub subtitle_with_account: bool,
    /// Serialized store supplied by the caller; read instead of the backend.
    pub secrets_cache: Option<String>,
}

impl Config {
    /// Storage backend for this configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the default store path cannot be
    /// determined.
    pub fn backend(&self) -> Result<Box<dyn Backend>> {
        store::select(self)
    }

    /// Output formatter honoring the account toggles.
    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.title_with_account, self.subtitle_with_account)
    }

    /// Cached store blob, if one was supplied and is not blank.
    pub fn cache(&self) -> Option<&str> {
        self.secrets_cache
            .as_deref()
            .filter(|cache| !cache.trim().is_empty())
    }
}
