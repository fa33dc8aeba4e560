// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Menu dispatch and command handlers.
//!
//! ```text
//! wrtgit            wrtbackup
//!   |                  |
//!   v                  v
//! git_menu::run     backup_menu::run
//!   |  \                |
//!   v   v               v
//! commit branch     backup handlers
//! ```
//!
//! A handler that fails reports through a dialog and returns to its menu;
//! only setup failures (logging, settings, missing tools) end the process.

pub mod backup_menu;
pub mod branch;
pub mod commit;
pub mod git_menu;


use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::process::CommandOutput;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::session::Session;

/// Shows a command result dialog, marking failures in the title.
pub(crate) fn render_result(
    prompter: &dyn Prompter,
    title: &str,
    output: &CommandOutput,
) -> Result<()> {
    if output.success() {
        prompter.message(title, output.text())?;
    } else {
        warn!(title, exit_code = output.exit_code(), "command failed");
        let title = format!("{title} (failed, exit {})", output.exit_code());
        prompter.message(&title, output.text())?;
    }
    Ok(())
}

/// Returns the active repository, or shows a hint and returns `None`.
pub(crate) fn require_repo(
    session: &Session,
    prompter: &dyn Prompter,
) -> Result<Option<PathBuf>> {
    match session.active_repo() {
        Some(repo) => Ok(Some(repo.to_path_buf())),
        None => {
            prompter.message(
                "No repository selected",
                "Use 'Select repository' first.",
            )?;
            Ok(None)
        }
    }
}

/// Runs a handler and turns its error into a dialog instead of unwinding
/// the menu loop.
pub(crate) fn absorb(prompter: &dyn Prompter, action: &str, result: Result<()>) -> Result<()> {
    if let Err(e) = result {
        warn!(action, error = %format!("{e:#}"), "action failed");
        prompter.message(&format!("{action} failed"), &format!("{e:#}"))?;
    }
    Ok(())
}

/// Repository name a clone of `url` would create, mirroring git's own rule.
pub(crate) fn clone_dir_name(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/').trim_end_matches(".git");
    let name = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(trimmed)
        .trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// True when the backup repository exists and is initialized.
pub(crate) fn backup_repo_ready(repo: &Path) -> bool {
    repo.join(".git").exists()
}
