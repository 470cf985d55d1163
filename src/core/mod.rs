//! Core library components.
//!
//! Provisioning URI parsing, the secret store, code generation, search and
//! result rendering. Nothing here prints or reads the process environment.

pub mod config;
pub mod constants;
pub mod domain;
pub mod format;
pub mod import;
pub mod lookup;
pub mod otp;
pub mod search;
pub mod store;
pub mod types;
pub mod uri;
