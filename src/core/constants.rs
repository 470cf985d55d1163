//! Constants used throughout ente-totp.
//!
//! Centralizes magic strings and default values.

/// Application directory name under the user's data directory.
pub const APP_DIR: &str = "ente-totp";

/// Store file name inside [`APP_DIR`].
pub const STORE_FILE: &str = "db.json";

/// Keychain service under which the serialized store is kept.
pub const KEYCHAIN_SERVICE: &str = "ente-totp";

/// Keychain account of the serialized store item.
pub const KEYCHAIN_ACCOUNT: &str = "secrets";

/// URI scheme of provisioning lines.
pub const OTPAUTH_SCHEME: &str = "otpauth";

/// Vendor display annotation appended by Ente exports.
pub const CODE_DISPLAY_TAG: &str = "codeDisplay";

/// Default number of code digits.
pub const DEFAULT_DIGITS: u32 = 6;

/// Default time step in seconds.
pub const DEFAULT_PERIOD: u64 = 30;

/// Largest supported code length (10^9 still fits a u32 modulus).
pub const MAX_DIGITS: u32 = 9;

/// Icon referenced by launcher items, relative to the workflow directory.
pub const LAUNCHER_ICON: &str = "./icon.png";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ENTE_TOTP_LOG";
