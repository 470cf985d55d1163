//! Secret record type.
//!
//! One TOTP secret with the parameters needed to generate its codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_DIGITS, DEFAULT_PERIOD};
use crate::core::types::{AccountName, Base32Secret, ServiceLabel};

/// HMAC hash function used for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Canonical upper-case name as used in provisioning URIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha512 => "SHA512",
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    /// Case-insensitive; accepts an optional dash (`sha-256`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "").as_str() {
            "SHA1" => Ok(Algorithm::Sha1),
            "SHA256" => Ok(Algorithm::Sha256),
            "SHA512" => Ok(Algorithm::Sha512),
            _ => Err(format!("unsupported algorithm '{}'", s)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored TOTP secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRecord {
    label: ServiceLabel,
    account: AccountName,
    secret: Base32Secret,
    algorithm: Algorithm,
    digits: u32,
    period: u64,
}

impl SecretRecord {
    /// Create a record with default parameters (SHA1, 6 digits, 30 s).
    ///
    /// An empty label falls back to the account name.
    pub fn new(
        label: impl Into<ServiceLabel>,
        account: impl Into<AccountName>,
        secret: impl Into<Base32Secret>,
    ) -> Self {
        let account = account.into();
        let mut label = label.into();
        if label.is_empty() {
            label = account.clone();
        }
        Self {
            label,
            account,
            secret: secret.into(),
            algorithm: Algorithm::default(),
            digits: DEFAULT_DIGITS,
            period: DEFAULT_PERIOD,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_period(mut self, period: u64) -> Self {
        self.period = period;
        self
    }

    /// Service label (grouping key).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Account name, possibly empty.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Base32 shared secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn period(&self) -> u64 {
        self.period
    }

    /// True when algorithm, digits and period are all the defaults.
    pub fn has_default_parameters(&self) -> bool {
        self.algorithm == Algorithm::Sha1
            && self.digits == DEFAULT_DIGITS
            && self.period == DEFAULT_PERIOD
    }
}

impl fmt::Display for SecretRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.account.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{} ({})", self.label, self.account)
        }
    }
}
