// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only repository checks using gix.
//!
//! ```text
//! query.rs --> gix --> .git/ (no subprocess)
//! ```
//!
//! The locator and health check call these on every candidate directory, so
//! they stay in-process instead of forking git per directory.

use std::path::Path;

use crate::error::{GitError, GixError, WrtResult};

/// True when `path` is inside a git work tree.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    gix::discover(path).is_ok()
}

/// Current branch name, `None` when HEAD is detached.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> WrtResult<Option<String>> {
    let repo = gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
    let head = repo
        .head_name()
        .map_err(|e| GitError::Gix(GixError::Head(e)))?;
    Ok(head.map(|name| name.shorten().to_string()))
}

/// Check for uncommitted changes (staged, unstaged, or untracked files).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or the status check fails.
pub fn has_uncommitted_changes(path: &Path) -> WrtResult<bool> {
    use gix::status::UntrackedFiles;

    let repo = gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;

    let has_changes = repo
        .status(gix::progress::Discard)
        .map_err(|_| GitError::CommandFailed {
            command: "status".to_string(),
            message: "failed to prepare status check".to_string(),
        })?
        .untracked_files(UntrackedFiles::Files)
        .into_iter(None)
        .map_err(|_| GitError::CommandFailed {
            command: "status".to_string(),
            message: "failed to check repository status".to_string(),
        })?
        .next()
        .is_some();

    Ok(has_changes)
}
