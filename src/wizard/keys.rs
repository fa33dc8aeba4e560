// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! SSH key management for the wizard.

use std::path::PathBuf;

use crate::core::process::{CommandOutput, ProcessBuilder};
use crate::error::WrtResult;

/// SSH key operations the wizard needs.
pub trait KeyOps {
    /// True when the private key file already exists.
    fn key_exists(&self) -> bool;

    /// Generates the key pair without a passphrase.
    fn create_key(&self) -> WrtResult<CommandOutput>;

    /// The public key text to register with the remote account.
    fn public_key(&self) -> WrtResult<String>;

    /// Authentication test against the remote host.
    fn test_connection(&self) -> WrtResult<CommandOutput>;
}

/// Real implementation over ssh-keygen and ssh.
#[derive(Debug, Clone)]
pub struct SshKeyOps {
    key_path: PathBuf,
    host: String,
}

impl SshKeyOps {
    /// Key operations for the default key and host
    /// (`~/.ssh/id_ed25519`, `git@github.com`).
    #[must_use]
    pub fn new() -> Self {
        let key_path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/root"))
            .join(".ssh")
            .join("id_ed25519");
        Self::with_paths(key_path, "git@github.com")
    }

    /// Key operations with an explicit key path and host (tests).
    #[must_use]
    pub fn with_paths(key_path: PathBuf, host: impl Into<String>) -> Self {
        Self {
            key_path,
            host: host.into(),
        }
    }

    fn public_key_path(&self) -> PathBuf {
        let mut name = self.key_path.as_os_str().to_owned();
        name.push(".pub");
        PathBuf::from(name)
    }
}

impl Default for SshKeyOps {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyOps for SshKeyOps {
    fn key_exists(&self) -> bool {
        self.key_path.exists()
    }

    fn create_key(&self) -> WrtResult<CommandOutput> {
        if let Some(parent) = self.key_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        ProcessBuilder::builder()
            .with_program("ssh-keygen")
            .with_args(vec![
                "-t".to_string(),
                "ed25519".to_string(),
                "-N".to_string(),
                String::new(),
                "-f".to_string(),
                self.key_path.display().to_string(),
                "-C".to_string(),
                "wrtmenu".to_string(),
            ])
            .build()
            .run_capture()
    }

    fn public_key(&self) -> WrtResult<String> {
        Ok(std::fs::read_to_string(self.public_key_path())?
            .trim()
            .to_string())
    }

    fn test_connection(&self) -> WrtResult<CommandOutput> {
        // BatchMode keeps a bad key from degenerating into a password prompt.
        ProcessBuilder::builder()
            .with_program("ssh")
            .with_args(vec![
                "-T".to_string(),
                "-o".to_string(),
                "BatchMode=yes".to_string(),
                "-o".to_string(),
                "StrictHostKeyChecking=accept-new".to_string(),
                "-i".to_string(),
                self.key_path.display().to_string(),
                self.host.clone(),
            ])
            .build()
            .run_capture()
    }
}
