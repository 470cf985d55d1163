//! Backend selection.
//!
//! Picks where the serialized store lives based on explicit configuration:
//! the macOS Keychain when requested and available, the JSON file otherwise.

use tracing::info;
#[cfg(not(target_os = "macos"))]
use tracing::warn;

use super::{Backend, Filesystem};
use crate::core::config::Config;
use crate::error::Result;

/// Backend for the given configuration.
///
/// On macOS `use_keychain` selects the Keychain. Other platforms have no
/// Keychain and always use the filesystem.
///
/// # Errors
///
/// Returns `StoreError::NoDataDir` if no store path is configured and the
/// default location cannot be determined.
pub fn select(config: &Config) -> Result<Box<dyn Backend>> {
    if config.use_keychain {
        #[cfg(target_os = "macos")]
        {
            info!("Using macOS Keychain backend");
            return Ok(Box::new(super::keychain::Keychain::new()));
        }
        #[cfg(not(target_os = "macos"))]
        warn!("Keychain backend is only available on macOS, using filesystem");
    }

    let path = match &config.store_path {
        Some(path) => path.clone(),
        None => Filesystem::default_path()?,
    };
    info!(path = %path.display(), "Using filesystem backend");
    Ok(Box::new(Filesystem::new(path)))
}
