//! ente-totp - TOTP codes from an Ente Auth export.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ente_totp::cli::output;
use ente_totp::cli::{execute, Cli};
use ente_totp::core::constants::LOG_ENV;
use ente_totp::error::{Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the rendered output
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ente_totp=debug")
        } else {
            EnvFilter::new("ente_totp=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = cli.config();
    if let Err(e) = execute(cli.command, &config) {
        let suggestion = match &e {
            Error::Store(StoreError::Unavailable(_)) => Some("run: ente-totp import <file>"),
            Error::Store(StoreError::KeychainAccessDenied) => {
                Some("allow keychain access, or drop --keychain")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
