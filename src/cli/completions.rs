//! Completions command.
//!
//! Prints a completion script for `ente-totp` to stdout, covering the
//! subcommands, `--format` values and global flags. Source it from the
//! shell's startup file.

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::Result;

const BIN_NAME: &str = "ente-totp";

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
        }
    }
}

/// Write the completion script for `shell`.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(
        CompletionShell::from(shell),
        &mut cmd,
        BIN_NAME,
        &mut std::io::stdout(),
    );
    Ok(())
}
