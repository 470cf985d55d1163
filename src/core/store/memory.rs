//! In-process backend.
//!
//! Holds the serialized store in memory; nothing survives the process.
//! Useful for library callers that manage persistence themselves, and for
//! tests.

use std::cell::RefCell;

use super::Backend;
use crate::error::{Result, StoreError};

/// Memory-only backend.
#[derive(Debug, Default)]
pub struct Memory {
    blob: RefCell<Option<String>>,
}

impl Memory {
    /// Empty backend; `load` fails until something is saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-filled with a serialized store.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }
}

impl Backend for Memory {
    fn save(&self, blob: &str) -> Result<()> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }

    fn load(&self) -> Result<String> {
        self.blob
            .borrow()
            .clone()
            .ok_or_else(|| StoreError::Unavailable("no secrets saved".to_string()).into())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
