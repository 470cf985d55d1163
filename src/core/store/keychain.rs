//! macOS Keychain backend.
//!
//! Stores the whole serialized store as one generic password item under
//! service `ente-totp`, account `secrets`.

#![cfg(target_os = "macos")]

use security_framework::passwords::{get_generic_password, set_generic_password};
use tracing::{debug, error, info};

use super::Backend;
use crate::core::constants::{KEYCHAIN_ACCOUNT, KEYCHAIN_SERVICE};
use crate::error::{Result, StoreError};

/// errSecItemNotFound
const ITEM_NOT_FOUND: i32 = -25300;
/// User cancelled the authorization prompt.
const USER_CANCELLED: i32 = -128;

/// Keychain-backed store.
pub struct Keychain {
    service: String,
    account: String,
}

impl Keychain {
    pub fn new() -> Self {
        Self {
            service: KEYCHAIN_SERVICE.to_string(),
            account: KEYCHAIN_ACCOUNT.to_string(),
        }
    }
}

impl Default for Keychain {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for Keychain {
    fn save(&self, blob: &str) -> Result<()> {
        info!(service = %self.service, account = %self.account, "storing secrets in Keychain");

        set_generic_password(&self.service, &self.account, blob.as_bytes()).map_err(|e| {
            error!(error = %e, "failed to store secrets in Keychain");
            if e.code() == USER_CANCELLED {
                StoreError::KeychainAccessDenied
            } else {
                StoreError::KeychainError(e.to_string())
            }
        })?;
        Ok(())
    }

    fn load(&self) -> Result<String> {
        debug!(service = %self.service, account = %self.account, "loading secrets from Keychain");

        let bytes = get_generic_password(&self.service, &self.account).map_err(|e| {
            match e.code() {
                ITEM_NOT_FOUND => StoreError::Unavailable(format!(
                    "no Keychain item for {}/{} (run import first)",
                    self.service, self.account
                )),
                USER_CANCELLED => StoreError::KeychainAccessDenied,
                code => {
                    error!(error_code = code, error = %e, "Keychain read failed");
                    StoreError::KeychainError(e.to_string())
                }
            }
        })?;

        String::from_utf8(bytes).map_err(|e| {
            StoreError::Unavailable(format!("invalid UTF-8 in Keychain data: {}", e)).into()
        })
    }

    fn name(&self) -> &'static str {
        "keychain"
    }
}
