// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted user settings for both tools.
//!
//! # Settings File
//!
//! ```toml
//! [user]
//! github_user = "alice"
//! router_name = "openwrt"
//!
//! [storage]
//! repos_dir = "/root/repos"
//!
//! [backup]
//! interval = "daily"
//! targets = ["network", "wireless"]
//! ```
//!
//! The key set is fixed; unknown keys in the file are ignored and missing
//! keys fall back to the defaults below. The record is always written
//! wholesale - there is no partial update and no locking (single user,
//! last writer wins).

pub mod store;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::backup::BackupTarget;
use crate::error::SettingsError;

pub use store::{LoadedSettings, SettingsStore};

/// Placeholder account id used when the wizard prompt is cancelled.
pub const PLACEHOLDER_USER: &str = "unknown";

/// Complete settings record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Identity options.
    pub user: UserSettings,
    /// Local storage options.
    pub storage: StorageSettings,
    /// Backup options.
    pub backup: BackupSettings,
}

impl Settings {
    /// Directory of the backup repository for this router.
    #[must_use]
    pub fn backup_repo_dir(&self) -> PathBuf {
        self.storage.repos_dir.join(&self.user.router_name)
    }
}

/// Identity settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Remote-account identifier (GitHub username).
    pub github_user: String,
    /// Display name of this router, also names the backup repository.
    pub router_name: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            github_user: PLACEHOLDER_USER.to_string(),
            router_name: "openwrt".to_string(),
        }
    }
}

/// Local storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Root directory for repositories (clones and the backup repository).
    pub repos_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            repos_dir: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("/root"))
                .join("repos"),
        }
    }
}

/// Backup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupSettings {
    /// Snapshot schedule interval (stored for provisioning, reported by the
    /// health check; no timer runs inside the tools).
    pub interval: Interval,
    /// Selected configuration categories.
    pub targets: Vec<BackupTarget>,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            interval: Interval::Daily,
            targets: vec![BackupTarget::Everything],
        }
    }
}

/// Snapshot schedule interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Hourly,
    #[default]
    Daily,
    Weekly,
    Never,
}

impl Interval {
    /// Every interval, in menu order.
    pub const ALL: [Self; 4] = [Self::Hourly, Self::Daily, Self::Weekly, Self::Never];
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hourly => write!(f, "hourly"),
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for Interval {
    type Err = SettingsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "never" => Ok(Self::Never),
            _ => Err(SettingsError::InvalidValue {
                key: "backup.interval".to_string(),
                message: format!("expected 'hourly', 'daily', 'weekly' or 'never', got '{s}'"),
            }),
        }
    }
}
