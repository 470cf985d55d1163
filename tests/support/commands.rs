//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create an ente-totp command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - ENTE_TOTP_STORE set to the test store file
    /// - Current directory set to the test working directory
    /// - Output toggles and cache cleared from the parent environment
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ente-totp").expect("failed to find ente-totp binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("ENTE_TOTP_STORE", self.store_path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "ENTE_TOTP_KEYCHAIN",
            "ENTE_TOTP_TITLE_WITH_ACCOUNT",
            "ENTE_TOTP_SUBTITLE_WITH_ACCOUNT",
            "ENTE_TOTP_SECRETS_CACHE",
            "ENTE_TOTP_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `ente-totp import <file>`.
    pub fn import(&self, file: &Path) -> Output {
        self.cmd()
            .arg("import")
            .arg(file)
            .output()
            .expect("failed to run ente-totp import")
    }

    /// Shortcut for `ente-totp get <query>`.
    pub fn get(&self, query: &str) -> Output {
        self.cmd()
            .args(["get", query])
            .output()
            .expect("failed to run ente-totp get")
    }

    /// Shortcut for `ente-totp get <query> --format <format>`.
    pub fn get_as(&self, query: &str, format: &str) -> Output {
        self.cmd()
            .args(["get", query, "--format", format])
            .output()
            .expect("failed to run ente-totp get --format")
    }
}
