// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `GitClient` trait and the record types its queries return.

use std::path::Path;

use crate::core::process::CommandOutput;
use crate::error::WrtResult;

/// One entry from a porcelain status listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Two-letter porcelain status code, trimmed (e.g. "M", "??", "A").
    pub status: String,
    /// Path relative to the repository root.
    pub path: String,
}

/// One commit from the snapshot history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    /// Abbreviated commit hash.
    pub hash: String,
    /// Author date, formatted `YYYY-MM-DD HH:MM`.
    pub date: String,
    /// Commit subject line.
    pub subject: String,
}

impl SnapshotEntry {
    /// Menu line for this snapshot.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}  {}  {}", self.hash, self.date, self.subject)
    }
}

/// Every git operation the menus need, behind one object-safe seam.
///
/// Display operations (`status`, `diff`, `log`, ...) return the raw
/// [`CommandOutput`] so a failed command is shown to the user instead of
/// aborting the menu loop. Parsing operations (`changed_files`, `history`,
/// ...) turn a non-zero exit into a `GitError` because their callers need
/// structured data or nothing.
pub trait GitClient {
    /// `git status` in human-readable form.
    fn status(&self, repo: &Path) -> WrtResult<CommandOutput>;

    /// Parsed `git status --porcelain`.
    fn changed_files(&self, repo: &Path) -> WrtResult<Vec<ChangedFile>>;

    /// `git diff` of the working tree against HEAD.
    fn diff(&self, repo: &Path) -> WrtResult<CommandOutput>;

    /// `git diff <from> <to>`.
    fn diff_range(&self, repo: &Path, from: &str, to: &str) -> WrtResult<CommandOutput>;

    /// Condensed `git log`, newest first, at most `limit` entries.
    fn log(&self, repo: &Path, limit: usize) -> WrtResult<CommandOutput>;

    /// Parsed commit list, newest first, at most `limit` entries.
    fn history(&self, repo: &Path, limit: usize) -> WrtResult<Vec<SnapshotEntry>>;

    /// Stage the given paths.
    fn stage(&self, repo: &Path, paths: &[String]) -> WrtResult<()>;

    /// Stage everything, including deletions and untracked files.
    fn stage_all(&self, repo: &Path) -> WrtResult<()>;

    /// Commit the staged changes.
    fn commit(&self, repo: &Path, message: &str) -> WrtResult<CommandOutput>;

    /// Current branch name, `None` when HEAD is detached.
    fn current_branch(&self, repo: &Path) -> WrtResult<Option<String>>;

    /// Local branch names.
    fn local_branches(&self, repo: &Path) -> WrtResult<Vec<String>>;

    /// `git branch --all` listing for display.
    fn all_branches(&self, repo: &Path) -> WrtResult<CommandOutput>;

    /// Switch to an existing branch.
    fn checkout(&self, repo: &Path, branch: &str) -> WrtResult<CommandOutput>;

    /// Create and switch to a new branch.
    fn create_branch(&self, repo: &Path, name: &str) -> WrtResult<CommandOutput>;

    /// `git pull <remote> <branch>`.
    fn pull(&self, repo: &Path, remote: &str, branch: &str) -> WrtResult<CommandOutput>;

    /// `git push <remote> <branch>`.
    fn push(&self, repo: &Path, remote: &str, branch: &str) -> WrtResult<CommandOutput>;

    /// Clone `url` into `dest`.
    fn clone_repo(&self, url: &str, dest: &Path) -> WrtResult<CommandOutput>;

    /// True when the repository has a remote with this name.
    fn has_remote(&self, repo: &Path, name: &str) -> WrtResult<bool>;

    /// Check out `pathspec` as it was at `rev`, into index and worktree.
    fn checkout_paths(&self, repo: &Path, rev: &str, pathspec: &str) -> WrtResult<()>;

    /// Discard index and worktree changes, back to HEAD.
    fn reset_hard(&self, repo: &Path) -> WrtResult<()>;

    /// Initialize a fresh repository at `repo`.
    fn init_repo(&self, repo: &Path) -> WrtResult<()>;
}
