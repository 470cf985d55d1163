//! Command-line interface.

pub mod completions;
pub mod get;
pub mod import;
pub mod output;

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::format::Format;

/// ente-totp - TOTP codes from an Ente Auth export, for the terminal and launchers.
#[derive(Parser)]
#[command(
    name = "ente-totp",
    about = "TOTP codes from an Ente Auth export, for the terminal and launchers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path of the secret store file
    #[arg(long, global = true, env = "ENTE_TOTP_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Keep the secret store in the macOS Keychain
    #[arg(
        long,
        global = true,
        env = "ENTE_TOTP_KEYCHAIN",
        value_parser = BoolishValueParser::new()
    )]
    pub keychain: bool,

    /// Append the account name to result titles
    #[arg(
        long,
        global = true,
        env = "ENTE_TOTP_TITLE_WITH_ACCOUNT",
        value_parser = BoolishValueParser::new()
    )]
    pub title_with_account: bool,

    /// Append the account name to result subtitles
    #[arg(
        long,
        global = true,
        env = "ENTE_TOTP_SUBTITLE_WITH_ACCOUNT",
        value_parser = BoolishValueParser::new()
    )]
    pub subtitle_with_account: bool,

    /// Serialized secret store to use instead of reading the backend
    #[arg(
        long,
        global = true,
        env = "ENTE_TOTP_SECRETS_CACHE",
        hide = true,
        hide_env_values = true
    )]
    pub secrets_cache: Option<String>,
}

impl Cli {
    /// Runtime configuration from the parsed flags.
    pub fn config(&self) -> Config {
        Config {
            store_path: self.store.clone(),
            use_keychain: self.keychain,
            title_with_account: self.title_with_account,
            subtitle_with_account: self.subtitle_with_account,
            secrets_cache: self.secrets_cache.clone(),
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Rebuild the secret store from an export file of otpauth:// URIs
    Import {
        /// Export file, one otpauth:// URI per line
        file: PathBuf,
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Show current and next codes for services matching a query
    Get {
        /// Search terms; none lists every service
        query: Vec<String>,
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
///
/// # Errors
///
/// Only plain-format failures are returned; JSON formats report errors
/// inside their envelope.
pub fn execute(command: Command, config: &Config) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Import { file, format } => import::execute(&file, format, config),
        Get { query, format } => get::execute(&query.join(" "), format, config),
        Completions { shell } => completions::execute(shell),
    }
}
