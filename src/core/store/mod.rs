//! Secret store and its persistence backends.
//!
//! The store is an ordered mapping from service label to the records
//! sharing it. It is rebuilt wholesale on import and only read afterwards.
//! Where the serialized document lives is a [`Backend`] concern.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Backend` trait
//! 2. Add the implementation in a new file (e.g., `secret_service.rs`)
//! 3. Wire it into [`select`]
//!
//! ## Document format
//!
//! ```text
//! {
//!   "Acme": [["alice", "JBSWY3DPEHPK3PXP"]],
//!   "Bank": [{"account": "bob", "secret": "...", "algorithm": "SHA256", "digits": 8, "period": 60}]
//! }
//! ```
//!
//! Entries with default parameters are written as `[account, secret]`
//! pairs, the rest as objects.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::constants::{DEFAULT_DIGITS, DEFAULT_PERIOD};
use crate::core::domain::{Algorithm, SecretRecord};
use crate::core::types::ServiceLabel;
use crate::error::{Result, StoreError};

mod backend;
mod fs;
mod memory;

#[cfg(target_os = "macos")]
pub mod keychain;

pub use backend::select;
pub use fs::Filesystem;
pub use memory::Memory;

/// Persistence capability for the serialized store.
///
/// Implementations hold exactly one document and replace it on every save.
pub trait Backend {
    /// Replace the stored document with `blob`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the document cannot be written.
    fn save(&self, blob: &str) -> Result<()>;

    /// Read the stored document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if nothing has been saved yet.
    fn load(&self) -> Result<String>;

    /// Short human-readable backend name for logs.
    fn name(&self) -> &'static str;
}

/// In-memory view of all stored secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretStore {
    groups: IndexMap<ServiceLabel, Vec<SecretRecord>>,
}

impl SecretStore {
    /// Group records by label, keeping arrival order.
    pub fn from_records(records: impl IntoIterator<Item = SecretRecord>) -> Self {
        let mut groups: IndexMap<ServiceLabel, Vec<SecretRecord>> = IndexMap::new();
        for record in records {
            groups
                .entry(record.label().to_string())
                .or_default()
                .push(record);
        }
        Self { groups }
    }

    /// Replace whatever `backend` holds with a store built from `records`.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the backend write fails.
    pub fn rebuild(
        backend: &dyn Backend,
        records: impl IntoIterator<Item = SecretRecord>,
    ) -> Result<Self> {
        let store = Self::from_records(records);
        backend.save(&store.to_json()?)?;
        info!(
            backend = backend.name(),
            labels = store.groups.len(),
            records = store.len(),
            "secret store rebuilt"
        );
        Ok(store)
    }

    /// Load the store from `backend`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the backend holds no data or the
    /// data is corrupt.
    pub fn load(backend: &dyn Backend) -> Result<Self> {
        Self::load_cached(backend, None)
    }

    /// Load the store, preferring a caller-held serialized copy.
    ///
    /// When `cache` is present the backend is not read at all.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the chosen source is missing or
    /// corrupt.
    pub fn load_cached(backend: &dyn Backend, cache: Option<&str>) -> Result<Self> {
        let blob = match cache.filter(|c| !c.trim().is_empty()) {
            Some(cached) => {
                debug!("using cached secrets");
                cached.to_string()
            }
            None => {
                debug!(backend = backend.name(), "reading secret store");
                backend.load()?
            }
        };
        Self::from_json(&blob)
    }

    /// Parse a serialized document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the JSON does not match the
    /// document format.
    pub fn from_json(blob: &str) -> Result<Self> {
        let document: IndexMap<ServiceLabel, Vec<StoredEntry>> = serde_json::from_str(blob)
            .map_err(|e| StoreError::Unavailable(format!("corrupt secret store: {}", e)))?;

        let records: Vec<SecretRecord> = document
            .iter()
            .flat_map(|(label, entries)| entries.iter().map(move |e| e.to_record(label)))
            .collect();
        if records.iter().any(|r| r.label().is_empty()) {
            return Err(
                StoreError::Unavailable("corrupt secret store: entry without a label".to_string())
                    .into(),
            );
        }

        // An empty key falls back to the account, so group by the record's label.
        Ok(Self::from_records(records))
    }

    /// Serialize to the pretty-printed document format.
    ///
    /// # Errors
    ///
    /// Returns error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let document: IndexMap<&str, Vec<StoredEntry>> = self
            .groups
            .iter()
            .map(|(label, records)| {
                (label.as_str(), records.iter().map(StoredEntry::from).collect())
            })
            .collect();
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// All records, grouped by label in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &SecretRecord> {
        self.groups.values().flatten()
    }

    /// Records stored under `label`.
    pub fn get(&self, label: &str) -> Option<&[SecretRecord]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serialized form of one record under its label.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Pair(String, String),
    Extended {
        account: String,
        secret: String,
        #[serde(default)]
        algorithm: Algorithm,
        #[serde(default = "default_digits")]
        digits: u32,
        #[serde(default = "default_period")]
        period: u64,
    },
}

fn default_digits() -> u32 {
    DEFAULT_DIGITS
}

fn default_period() -> u64 {
    DEFAULT_PERIOD
}

impl StoredEntry {
    fn to_record(&self, label: &str) -> SecretRecord {
        match self {
            StoredEntry::Pair(account, secret) => {
                SecretRecord::new(label, account.as_str(), secret.as_str())
            }
            StoredEntry::Extended {
                account,
                secret,
                algorithm,
                digits,
                period,
            } => SecretRecord::new(label, account.as_str(), secret.as_str())
                .with_algorithm(*algorithm)
                .with_digits(*digits)
                .with_period(*period),
        }
    }
}

impl From<&SecretRecord> for StoredEntry {
    fn from(record: &SecretRecord) -> Self {
        if record.has_default_parameters() {
            StoredEntry::Pair(record.account().to_string(), record.secret().to_string())
        } else {
            StoredEntry::Extended {
                account: record.account().to_string(),
                secret: record.secret().to_string(),
                algorithm: record.algorithm(),
                digits: record.digits(),
                period: record.period(),
            }
        }
    }
}
