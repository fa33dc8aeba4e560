// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings persistence.
//!
//! ```text
//! SettingsStore::load()
//!   file absent  --> defaults, first_run = true   (triggers the wizard)
//!   file present --> config crate (TOML source) --> Settings
//!
//! SettingsStore::save(&Settings)
//!   toml::to_string_pretty --> overwrite whole file
//! ```

use std::path::{Path, PathBuf};
use tracing::debug;

use super::Settings;
use crate::error::{SettingsError, WrtResult};

/// Result of loading the settings file.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    /// The settings record (defaults when the file was absent).
    pub settings: Settings,
    /// True when no settings file existed yet - the caller runs the wizard.
    pub first_run: bool,
}

/// Loads and saves the settings file at one fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the default location.
    ///
    /// `$WRTMENU_CONFIG_HOME/settings.toml` when the variable is set
    /// (mainly for tests), otherwise `<config dir>/wrtmenu/settings.toml`.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    fn default_path() -> PathBuf {
        if let Ok(home) = std::env::var("WRTMENU_CONFIG_HOME")
            && !home.is_empty()
        {
            return PathBuf::from(home).join("settings.toml");
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/root/.config"))
            .join("wrtmenu")
            .join("settings.toml")
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings file.
    ///
    /// An absent file is not an error: the defaults are returned with
    /// `first_run = true` and nothing is persisted until an explicit save.
    /// Unknown keys in the file are ignored; missing keys fall back to the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError::ParseError` when the file exists but cannot
    /// be read as TOML matching the settings record.
    pub fn load(&self) -> WrtResult<LoadedSettings> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(LoadedSettings {
                settings: Settings::default(),
                first_run: true,
            });
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(self.path.as_path()).format(config::FileFormat::Toml))
            .build()
            .and_then(config::Config::try_deserialize::<Settings>)
            .map_err(|e| SettingsError::ParseError {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        debug!(path = %self.path.display(), "settings loaded");
        Ok(LoadedSettings {
            settings,
            first_run: false,
        })
    }

    /// Serializes the full record and overwrites the settings file.
    ///
    /// Callers must supply the complete record; there is no merging.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError::WriteError` when the parent directory or the
    /// file cannot be written.
    pub fn save(&self, settings: &Settings) -> WrtResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::WriteError {
                path: self.path.display().to_string(),
                source: e,
            })?;
        }

        let content =
            toml::to_string_pretty(settings).map_err(|e| SettingsError::InvalidValue {
                key: "settings".to_string(),
                message: e.to_string(),
            })?;

        std::fs::write(&self.path, content).map_err(|e| SettingsError::WriteError {
            path: self.path.display().to_string(),
            source: e,
        })?;

        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
