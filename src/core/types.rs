//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// Name of the service a secret belongs to (e.g., "GitHub").
///
/// Grouping key of the secret store.
pub type ServiceLabel = String;

/// Account name attached to a secret (e.g., "alice@example.com").
///
/// May be empty when the provisioning URI only carries a label.
pub type AccountName = String;

/// A shared secret in base32 text form, normalized to upper case
/// without padding or whitespace.
pub type Base32Secret = String;

/// Unix timestamp in whole seconds.
pub type UnixSeconds = u64;
