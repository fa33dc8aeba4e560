// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test support: a recording `GitClient` double and real-repo fixtures.
//!
//! Only test code uses this module; the binaries never touch it.

use std::collections::HashSet;
use std::path::Path;
use std::process::Command;
use std::sync::Mutex;

use super::client::{ChangedFile, GitClient, SnapshotEntry};
use crate::core::process::CommandOutput;
use crate::error::{GitError, WrtResult};

/// Recording fake for menu-handler tests.
///
/// Every call is appended to an operation log as `"<op> <detail>"`; canned
/// data feeds the query methods, and individual operations can be switched
/// to fail. The repository path argument is ignored.
#[derive(Debug, Default)]
pub struct FakeGit {
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<String>>,
    pub branches: Mutex<Vec<String>>,
    pub current: Mutex<Option<String>>,
    pub changed: Mutex<Vec<ChangedFile>>,
    pub history: Mutex<Vec<SnapshotEntry>>,
    pub remotes: Mutex<Vec<String>>,
}

impl FakeGit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_current_branch(self, name: &str) -> Self {
        *self.current.lock().unwrap() = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn with_branches(self, names: &[&str]) -> Self {
        *self.branches.lock().unwrap() = names.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_changed(self, files: &[(&str, &str)]) -> Self {
        *self.changed.lock().unwrap() = files
            .iter()
            .map(|(status, path)| ChangedFile {
                status: (*status).to_string(),
                path: (*path).to_string(),
            })
            .collect();
        self
    }

    #[must_use]
    pub fn with_history(self, entries: &[(&str, &str, &str)]) -> Self {
        *self.history.lock().unwrap() = entries
            .iter()
            .map(|(hash, date, subject)| SnapshotEntry {
                hash: (*hash).to_string(),
                date: (*date).to_string(),
                subject: (*subject).to_string(),
            })
            .collect();
        self
    }

    #[must_use]
    pub fn with_remotes(self, names: &[&str]) -> Self {
        *self.remotes.lock().unwrap() = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Makes the named operation (e.g. "commit") fail from now on.
    #[must_use]
    pub fn failing_on(self, op: &str) -> Self {
        self.failing.lock().unwrap().insert(op.to_string());
        self
    }

    /// The operation log so far.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// True when any logged operation starts with `prefix`.
    #[must_use]
    pub fn called(&self, prefix: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|call| call.starts_with(prefix))
    }

    fn record(&self, op: &str, detail: &str) -> WrtResult<()> {
        let entry = if detail.is_empty() {
            op.to_string()
        } else {
            format!("{op} {detail}")
        };
        self.calls.lock().unwrap().push(entry);
        if self.failing.lock().unwrap().contains(op) {
            return Err(GitError::CommandFailed {
                command: op.to_string(),
                message: format!("scripted failure for '{op}'"),
            }
            .into());
        }
        Ok(())
    }

    fn ok_output(text: &str) -> CommandOutput {
        CommandOutput::new(0, text.to_string())
    }
}

impl GitClient for FakeGit {
    fn status(&self, _repo: &Path) -> WrtResult<CommandOutput> {
        self.record("status", "")?;
        let changed = self.changed.lock().unwrap();
        if changed.is_empty() {
            Ok(Self::ok_output("nothing to commit, working tree clean"))
        } else {
            let lines: Vec<String> = changed
                .iter()
                .map(|f| format!("{} {}", f.status, f.path))
                .collect();
            Ok(Self::ok_output(&lines.join("\n")))
        }
    }

    fn changed_files(&self, _repo: &Path) -> WrtResult<Vec<ChangedFile>> {
        self.record("changed_files", "")?;
        Ok(self.changed.lock().unwrap().clone())
    }

    fn diff(&self, _repo: &Path) -> WrtResult<CommandOutput> {
        self.record("diff", "")?;
        Ok(Self::ok_output("--- fake diff ---"))
    }

    fn diff_range(&self, _repo: &Path, from: &str, to: &str) -> WrtResult<CommandOutput> {
        self.record("diff_range", &format!("{from}..{to}"))?;
        Ok(Self::ok_output(&format!("--- fake diff {from}..{to} ---")))
    }

    fn log(&self, _repo: &Path, limit: usize) -> WrtResult<CommandOutput> {
        self.record("log", &limit.to_string())?;
        let lines: Vec<String> = self
            .history
            .lock()
            .unwrap()
            .iter()
            .take(limit)
            .map(|e| format!("{} {}", e.hash, e.subject))
            .collect();
        Ok(Self::ok_output(&lines.join("\n")))
    }

    fn history(&self, _repo: &Path, limit: usize) -> WrtResult<Vec<SnapshotEntry>> {
        self.record("history", &limit.to_string())?;
        Ok(self
            .history
            .lock()
            .unwrap()
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    fn stage(&self, _repo: &Path, paths: &[String]) -> WrtResult<()> {
        self.record("stage", &paths.join(" "))
    }

    fn stage_all(&self, _repo: &Path) -> WrtResult<()> {
        self.record("stage_all", "")
    }

    fn commit(&self, _repo: &Path, message: &str) -> WrtResult<CommandOutput> {
        self.record("commit", message)?;
        Ok(Self::ok_output("1 file changed"))
    }

    fn current_branch(&self, _repo: &Path) -> WrtResult<Option<String>> {
        self.record("current_branch", "")?;
        Ok(self.current.lock().unwrap().clone())
    }

    fn local_branches(&self, _repo: &Path) -> WrtResult<Vec<String>> {
        self.record("local_branches", "")?;
        Ok(self.branches.lock().unwrap().clone())
    }

    fn all_branches(&self, _repo: &Path) -> WrtResult<CommandOutput> {
        self.record("all_branches", "")?;
        Ok(Self::ok_output(&self.branches.lock().unwrap().join("\n")))
    }

    fn checkout(&self, _repo: &Path, branch: &str) -> WrtResult<CommandOutput> {
        self.record("checkout", branch)?;
        *self.current.lock().unwrap() = Some(branch.to_string());
        Ok(Self::ok_output(&format!("Switched to branch '{branch}'")))
    }

    fn create_branch(&self, _repo: &Path, name: &str) -> WrtResult<CommandOutput> {
        self.record("create_branch", name)?;
        self.branches.lock().unwrap().push(name.to_string());
        *self.current.lock().unwrap() = Some(name.to_string());
        Ok(Self::ok_output(&format!("Switched to a new branch '{name}'")))
    }

    fn pull(&self, _repo: &Path, remote: &str, branch: &str) -> WrtResult<CommandOutput> {
        self.record("pull", &format!("{remote} {branch}"))?;
        Ok(Self::ok_output("Already up to date."))
    }

    fn push(&self, _repo: &Path, remote: &str, branch: &str) -> WrtResult<CommandOutput> {
        self.record("push", &format!("{remote} {branch}"))?;
        Ok(Self::ok_output("Everything up-to-date"))
    }

    fn clone_repo(&self, url: &str, dest: &Path) -> WrtResult<CommandOutput> {
        self.record("clone", &format!("{url} {}", dest.display()))?;
        Ok(Self::ok_output("Cloning..."))
    }

    fn has_remote(&self, _repo: &Path, name: &str) -> WrtResult<bool> {
        self.record("has_remote", name)?;
        Ok(self.remotes.lock().unwrap().iter().any(|r| r == name))
    }

    fn checkout_paths(&self, _repo: &Path, rev: &str, pathspec: &str) -> WrtResult<()> {
        self.record("checkout_paths", &format!("{rev} {pathspec}"))
    }

    fn reset_hard(&self, _repo: &Path) -> WrtResult<()> {
        self.record("reset_hard", "")
    }

    fn init_repo(&self, _repo: &Path) -> WrtResult<()> {
        self.record("init_repo", "")
    }
}

/// Runs one real git command in `cwd`, panicking on failure (fixtures only).
pub fn git_fixture(cwd: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initializes a repository with one commit and a deterministic identity.
pub fn init_test_repo(dir: &Path) {
    git_fixture(dir, &["init", "--quiet", "--initial-branch=main"]);
    git_fixture(dir, &["config", "user.name", "Test User"]);
    git_fixture(dir, &["config", "user.email", "test@example.com"]);
    std::fs::write(dir.join("README"), "fixture\n").expect("failed to write fixture file");
    git_fixture(dir, &["add", "README"]);
    git_fixture(dir, &["commit", "--quiet", "-m", "Initial commit"]);
}
