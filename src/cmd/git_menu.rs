// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Main menu of the git manager.

use tracing::info;

use super::{absorb, branch, clone_dir_name, commit, render_result, require_repo};
use crate::error::Result;
use crate::git::GitClient;
use crate::locator::{self, MAX_DEPTH};
use crate::prompt::Prompter;
use crate::session::Session;

const MENU: [&str; 10] = [
    "Select repository",
    "View status",
    "Pull",
    "Push",
    "Commit changes",
    "Branches",
    "Clone repository",
    "View log",
    "Show diff",
    "Exit",
];

const LOG_LIMIT: usize = 30;

/// Runs the git-manager menu loop until the user exits.
///
/// # Errors
///
/// Only terminal I/O failures propagate; every command failure is shown
/// as a dialog and the loop continues.
pub fn run(session: &mut Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    loop {
        let title = format!("Git manager - {}", session.repo_label());
        let items: Vec<String> = MENU.iter().map(ToString::to_string).collect();

        let Some(choice) = prompter.choose_one(&title, &items)? else {
            return Ok(());
        };

        match choice {
            0 => absorb(prompter, "Select repository", select_repo(session, prompter))?,
            1 => absorb(prompter, "Status", status(session, prompter, git))?,
            2 => absorb(prompter, "Pull", pull(session, prompter, git))?,
            3 => absorb(prompter, "Push", push(session, prompter, git))?,
            4 => absorb(prompter, "Commit", commit_changes(session, prompter, git))?,
            5 => absorb(prompter, "Branches", branches(session, prompter, git))?,
            6 => absorb(prompter, "Clone", clone(session, prompter, git))?,
            7 => absorb(prompter, "Log", log(session, prompter, git))?,
            8 => absorb(prompter, "Diff", diff(session, prompter, git))?,
            _ => return Ok(()),
        }
    }
}

fn select_repo(session: &mut Session, prompter: &dyn Prompter) -> Result<()> {
    let roots = locator::default_search_roots(session.settings());
    let repos = locator::find_repos(&roots, MAX_DEPTH);
    if repos.is_empty() {
        prompter.message(
            "No repositories found",
            "Nothing with a .git directory under the search roots. \
             Clone one first, or check the storage directory in the settings.",
        )?;
        return Ok(());
    }

    let items: Vec<String> = repos.iter().map(|p| p.display().to_string()).collect();
    if let Some(index) = prompter.choose_one("Select repository", &items)? {
        info!(repo = %repos[index].display(), "repository selected");
        session.set_active_repo(Some(repos[index].clone()));
    }
    Ok(())
}

fn status(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(repo) = require_repo(session, prompter)? else {
        return Ok(());
    };
    let output = git.status(&repo)?;
    render_result(prompter, "Status", &output)
}

/// Resolves remote and branch for pull/push; reports and returns `None`
/// when the repository has no origin or HEAD is detached.
fn sync_target(
    repo: &std::path::Path,
    prompter: &dyn Prompter,
    git: &dyn GitClient,
) -> Result<Option<String>> {
    if !git.has_remote(repo, "origin")? {
        prompter.message(
            "No origin remote",
            "This repository has no 'origin' remote to sync with.",
        )?;
        return Ok(None);
    }
    match git.current_branch(repo)? {
        Some(branch) => Ok(Some(branch)),
        None => {
            prompter.message(
                "Detached HEAD",
                "Not on a branch; switch to one before syncing.",
            )?;
            Ok(None)
        }
    }
}

fn pull(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(repo) = require_repo(session, prompter)? else {
        return Ok(());
    };
    let Some(branch) = sync_target(&repo, prompter, git)? else {
        return Ok(());
    };
    let output = git.pull(&repo, "origin", &branch)?;
    render_result(prompter, "Pull", &output)
}

fn push(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(repo) = require_repo(session, prompter)? else {
        return Ok(());
    };
    let Some(branch) = sync_target(&repo, prompter, git)? else {
        return Ok(());
    };
    let output = git.push(&repo, "origin", &branch)?;
    render_result(prompter, "Push", &output)
}

fn commit_changes(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(repo) = require_repo(session, prompter)? else {
        return Ok(());
    };
    commit::run(&repo, prompter, git)
}

fn branches(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(repo) = require_repo(session, prompter)? else {
        return Ok(());
    };
    branch::run(&repo, prompter, git)
}

fn clone(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(url) = prompter.input("Repository URL", None)? else {
        return Ok(());
    };
    let url = url.trim().to_string();
    let Some(name) = clone_dir_name(&url) else {
        prompter.message("Invalid URL", "Could not derive a directory name from that URL.")?;
        return Ok(());
    };

    let dest = session.settings().storage.repos_dir.join(&name);
    if dest.exists() {
        prompter.message(
            "Already exists",
            &format!("{} already exists, not cloning over it.", dest.display()),
        )?;
        return Ok(());
    }

    std::fs::create_dir_all(&session.settings().storage.repos_dir)?;
    let output = git.clone_repo(&url, &dest)?;
    render_result(prompter, "Clone", &output)?;
    if output.success() {
        // The current selection stays; switching is an explicit action.
        prompter.message(
            "Cloned",
            &format!(
                "Cloned into {}. Use 'Select repository' to work on it.",
                dest.display()
            ),
        )?;
    }
    Ok(())
}

fn log(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(repo) = require_repo(session, prompter)? else {
        return Ok(());
    };
    let output = git.log(&repo, LOG_LIMIT)?;
    render_result(prompter, "Log", &output)
}

fn diff(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(repo) = require_repo(session, prompter)? else {
        return Ok(());
    };
    let output = git.diff(&repo)?;
    render_result(prompter, "Diff", &output)
}
