// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory state for one menu run.
//!
//! The active repository lives here and only here; it is never persisted,
//! so each tool start begins with no selection.

use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// Mutable state threaded through the menu loop.
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    active_repo: Option<PathBuf>,
}

impl Session {
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self {
            settings,
            active_repo: None,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// The repository menu actions operate on, if one is selected.
    #[must_use]
    pub fn active_repo(&self) -> Option<&Path> {
        self.active_repo.as_deref()
    }

    pub fn set_active_repo(&mut self, repo: Option<PathBuf>) {
        self.active_repo = repo;
    }

    /// Short repository label for menu titles.
    #[must_use]
    pub fn repo_label(&self) -> String {
        self.active_repo.as_ref().map_or_else(
            || "(no repository)".to_string(),
            |repo| {
                repo.file_name()
                    .map_or_else(|| repo.display().to_string(), |n| n.to_string_lossy().into_owned())
            },
        )
    }
}
