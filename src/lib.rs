//! ente-totp - TOTP codes from an Ente Auth export, for the terminal and launchers.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── import        # Rebuild the store from an export file
//! │   ├── get           # Fuzzy lookup with current/next codes
//! │   ├── output        # Terminal helpers for plain output
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Runtime configuration
//!     ├── domain/       # SecretRecord and Algorithm
//!     ├── uri           # otpauth:// URI parsing
//!     ├── otp           # HOTP/TOTP code generation
//!     ├── search        # Token scoring and ranking
//!     ├── lookup        # Search plus code generation
//!     ├── format        # JSON, launcher and plain rendering
//!     ├── import        # Export file to store
//!     └── store/        # Secret store and its backends
//!         ├── mod       # SecretStore and Backend trait
//!         ├── fs        # JSON file in the data directory
//!         ├── keychain  # macOS Keychain
//!         └── memory    # In-process, for tests
//! ```
//!
//! # Features
//!
//! - RFC 6238 codes with SHA1, SHA256 and SHA512
//! - Tolerant import: bad lines become warnings
//! - Ranked fuzzy search over labels and accounts
//! - Output for scripts (JSON), launchers (Alfred items) and humans

pub mod cli;
pub mod core;
pub mod error;
