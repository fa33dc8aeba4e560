// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive commit workflow.
//!
//! ```text
//! diff --> pick files --> message --> stage --> commit
//! ```
//!
//! Cancelling any step, picking no files, or entering a blank message
//! aborts without touching the index.

use std::path::Path;
use tracing::info;

use super::render_result;
use crate::error::Result;
use crate::git::GitClient;
use crate::prompt::Prompter;

pub fn run(repo: &Path, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let diff = git.diff(repo)?;
    render_result(prompter, "Pending changes", &diff)?;

    let changed = git.changed_files(repo)?;
    if changed.is_empty() {
        prompter.message("Nothing to commit", "The working tree is clean.")?;
        return Ok(());
    }

    let items: Vec<String> = changed
        .iter()
        .map(|f| format!("[{}] {}", f.status, f.path))
        .collect();
    let defaults = vec![true; items.len()];

    let Some(picked) = prompter.choose_many("Files to commit", &items, &defaults)? else {
        return Ok(());
    };
    if picked.is_empty() {
        prompter.message("Commit aborted", "No files selected.")?;
        return Ok(());
    }

    let message = match prompter.input("Commit message", None)? {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => {
            prompter.message("Commit aborted", "A commit needs a message.")?;
            return Ok(());
        }
    };

    let paths: Vec<String> = picked
        .into_iter()
        .filter_map(|i| changed.get(i).map(|f| f.path.clone()))
        .collect();
    git.stage(repo, &paths)?;

    info!(files = paths.len(), "committing");
    let output = git.commit(repo, &message)?;
    render_result(prompter, "Commit", &output)
}
