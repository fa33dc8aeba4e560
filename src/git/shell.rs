// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! `GitClient` implementation over the git CLI.
//!
//! Every invocation is `git --no-pager <args>` with credential prompts
//! disabled (`GIT_TERMINAL_PROMPT=0`, `GCM_INTERACTIVE=never`), so a
//! network operation against a dead remote fails instead of hanging the
//! menu on a hidden password prompt.

use std::path::Path;
use tracing::debug;

use super::client::{ChangedFile, GitClient, SnapshotEntry};
use crate::core::process::{CommandOutput, ProcessBuilder};
use crate::error::{GitError, WrtResult};

/// Real git CLI client.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellGit;

impl ShellGit {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs `git --no-pager <args>` in `cwd` and captures the output.
    ///
    /// The exit status is returned as data; see `run_parsed` for the
    /// error-on-failure variant.
    fn run(cwd: Option<&Path>, args: &[&str]) -> WrtResult<CommandOutput> {
        let mut full_args = vec!["--no-pager".to_string()];
        full_args.extend(args.iter().map(ToString::to_string));

        ProcessBuilder::builder()
            .with_program("git")
            .with_args(full_args)
            .maybe_with_cwd(cwd.map(Path::to_path_buf))
            .with_envs(vec![
                ("GIT_TERMINAL_PROMPT".to_string(), "0".to_string()),
                ("GCM_INTERACTIVE".to_string(), "never".to_string()),
            ])
            .build()
            .run_capture()
    }

    /// Runs git and treats a non-zero exit as a `GitError::CommandFailed`.
    fn run_parsed(cwd: &Path, args: &[&str]) -> WrtResult<CommandOutput> {
        let output = Self::run(Some(cwd), args)?;
        if output.success() {
            Ok(output)
        } else {
            Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: output.text().to_string(),
            }
            .into())
        }
    }
}

impl GitClient for ShellGit {
    fn status(&self, repo: &Path) -> WrtResult<CommandOutput> {
        Self::run(Some(repo), &["status"])
    }

    fn changed_files(&self, repo: &Path) -> WrtResult<Vec<ChangedFile>> {
        let output = Self::run_parsed(repo, &["status", "--porcelain"])?;
        Ok(parse_porcelain(output.text()))
    }

    fn diff(&self, repo: &Path) -> WrtResult<CommandOutput> {
        Self::run(Some(repo), &["diff", "HEAD"])
    }

    fn diff_range(&self, repo: &Path, from: &str, to: &str) -> WrtResult<CommandOutput> {
        Self::run(Some(repo), &["diff", from, to])
    }

    fn log(&self, repo: &Path, limit: usize) -> WrtResult<CommandOutput> {
        let limit = limit.to_string();
        Self::run(
            Some(repo),
            &["log", "-n", &limit, "--oneline", "--decorate"],
        )
    }

    fn history(&self, repo: &Path, limit: usize) -> WrtResult<Vec<SnapshotEntry>> {
        let limit = limit.to_string();
        let output = Self::run_parsed(
            repo,
            &[
                "log",
                "-n",
                &limit,
                "--date=format:%Y-%m-%d %H:%M",
                "--pretty=format:%h%x09%ad%x09%s",
            ],
        )?;
        parse_history(output.text())
    }

    fn stage(&self, repo: &Path, paths: &[String]) -> WrtResult<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        Self::run_parsed(repo, &args)?;
        Ok(())
    }

    fn stage_all(&self, repo: &Path) -> WrtResult<()> {
        Self::run_parsed(repo, &["add", "--all"])?;
        Ok(())
    }

    fn commit(&self, repo: &Path, message: &str) -> WrtResult<CommandOutput> {
        Self::run(Some(repo), &["commit", "-m", message])
    }

    fn current_branch(&self, repo: &Path) -> WrtResult<Option<String>> {
        let output = Self::run(Some(repo), &["symbolic-ref", "--short", "HEAD"])?;
        if output.success() {
            Ok(Some(output.text().to_string()))
        } else {
            // Detached HEAD or unborn branch.
            Ok(None)
        }
    }

    fn local_branches(&self, repo: &Path) -> WrtResult<Vec<String>> {
        let output = Self::run_parsed(
            repo,
            &["for-each-ref", "--format=%(refname:short)", "refs/heads"],
        )?;
        Ok(output
            .text()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }

    fn all_branches(&self, repo: &Path) -> WrtResult<CommandOutput> {
        Self::run(Some(repo), &["branch", "--all", "--verbose"])
    }

    fn checkout(&self, repo: &Path, branch: &str) -> WrtResult<CommandOutput> {
        Self::run(Some(repo), &["checkout", branch])
    }

    fn create_branch(&self, repo: &Path, name: &str) -> WrtResult<CommandOutput> {
        Self::run(Some(repo), &["checkout", "-b", name])
    }

    fn pull(&self, repo: &Path, remote: &str, branch: &str) -> WrtResult<CommandOutput> {
        Self::run(Some(repo), &["pull", remote, branch])
    }

    fn push(&self, repo: &Path, remote: &str, branch: &str) -> WrtResult<CommandOutput> {
        Self::run(Some(repo), &["push", "-u", remote, branch])
    }

    fn clone_repo(&self, url: &str, dest: &Path) -> WrtResult<CommandOutput> {
        let dest_str = dest.display().to_string();
        // Run from the parent so a relative destination lands next to its
        // siblings under the storage root.
        let parent = dest.parent().filter(|p| !p.as_os_str().is_empty());
        Self::run(parent, &["clone", url, &dest_str])
    }

    fn has_remote(&self, repo: &Path, name: &str) -> WrtResult<bool> {
        let output = Self::run_parsed(repo, &["remote"])?;
        Ok(output.text().lines().any(|line| line.trim() == name))
    }

    fn checkout_paths(&self, repo: &Path, rev: &str, pathspec: &str) -> WrtResult<()> {
        Self::run_parsed(repo, &["checkout", rev, "--", pathspec])?;
        Ok(())
    }

    fn reset_hard(&self, repo: &Path) -> WrtResult<()> {
        Self::run_parsed(repo, &["reset", "--hard", "HEAD"])?;
        Ok(())
    }

    fn init_repo(&self, repo: &Path) -> WrtResult<()> {
        debug!(path = %repo.display(), "git init");
        Self::run_parsed(repo, &["init", "--quiet"])?;
        Ok(())
    }
}

/// Parses `git status --porcelain` output.
fn parse_porcelain(text: &str) -> Vec<ChangedFile> {
    text.lines()
        .filter(|line| line.len() > 3)
        .map(|line| {
            let (code, rest) = line.split_at(2);
            let path = rest.trim_start();
            // Renames list "old -> new"; the new path is what gets staged.
            let path = path.rsplit(" -> ").next().unwrap_or(path);
            ChangedFile {
                status: code.trim().to_string(),
                path: path.to_string(),
            }
        })
        .collect()
}

/// Parses tab-separated `%h%x09%ad%x09%s` log lines.
fn parse_history(text: &str) -> WrtResult<Vec<SnapshotEntry>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut fields = line.splitn(3, '\t');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(hash), Some(date), Some(subject)) => Ok(SnapshotEntry {
                    hash: hash.to_string(),
                    date: date.to_string(),
                    subject: subject.to_string(),
                }),
                _ => Err(GitError::UnparseableOutput {
                    command: "git log".to_string(),
                    message: format!("expected 3 tab-separated fields, got '{line}'"),
                }
                .into()),
            }
        })
        .collect()
}
