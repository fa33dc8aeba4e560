// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Main menu of the backup tool.
//!
//! All actions operate on the backup repository
//! (`<repos_dir>/<router_name>`); the live configuration tree is only read
//! for snapshots and only written by an explicit restore.

use std::fmt::Write as _;
use std::path::Path;
use tracing::{info, warn};

use super::{backup_repo_ready, render_result};
use crate::backup::{
    BackupTarget, refresh_worktree, restore_to_live, snapshot_message, wants_manifest,
    write_package_manifest,
};
use crate::core::process::{ProcessBuilder, tool_available};
use crate::error::Result;
use crate::git::{GitClient, query};
use crate::prompt::Prompter;
use crate::session::Session;
use crate::settings::{Interval, SettingsStore};

const MENU: [&str; 9] = [
    "Backup now",
    "View changes",
    "Restore snapshot",
    "History",
    "Compare snapshots",
    "Health check",
    "Export archive",
    "Settings",
    "Exit",
];

const HISTORY_LIMIT: usize = 30;

/// Runs the backup-tool menu loop until the user exits.
///
/// `live_root` is `/` on a router; tests point it at a scratch tree.
///
/// # Errors
///
/// Only terminal I/O failures propagate; command failures are shown as
/// dialogs and the loop continues.
pub fn run(
    session: &mut Session,
    prompter: &dyn Prompter,
    git: &dyn GitClient,
    store: &SettingsStore,
    live_root: &Path,
) -> Result<()> {
    loop {
        let title = format!("Backup - {}", session.settings().user.router_name);
        let items: Vec<String> = MENU.iter().map(ToString::to_string).collect();

        let Some(choice) = prompter.choose_one(&title, &items)? else {
            return Ok(());
        };

        let result = match choice {
            0 => backup_now(session, prompter, git, live_root),
            1 => view_changes(session, prompter, git, live_root),
            2 => restore(session, prompter, git, live_root),
            3 => history(session, prompter, git),
            4 => compare(session, prompter, git),
            5 => health_check(session, prompter, git),
            6 => export(session, prompter),
            7 => edit_settings(session, prompter, store),
            _ => return Ok(()),
        };
        super::absorb(prompter, MENU[choice], result)?;
    }
}

/// Backup repository path, or a hint pointing at the health check when it
/// is not initialized yet.
fn require_backup_repo(
    session: &Session,
    prompter: &dyn Prompter,
) -> Result<Option<std::path::PathBuf>> {
    let repo = session.settings().backup_repo_dir();
    if backup_repo_ready(&repo) {
        Ok(Some(repo))
    } else {
        prompter.message(
            "Backup repository not ready",
            &format!(
                "{} is not an initialized repository. Run the health check to set it up.",
                repo.display()
            ),
        )?;
        Ok(None)
    }
}

fn backup_now(
    session: &Session,
    prompter: &dyn Prompter,
    git: &dyn GitClient,
    live_root: &Path,
) -> Result<()> {
    let Some(repo) = require_backup_repo(session, prompter)? else {
        return Ok(());
    };
    let targets = &session.settings().backup.targets;

    let copied = refresh_worktree(&repo, live_root, targets)?;
    let manifest = if wants_manifest(targets) {
        write_package_manifest(&repo)?
    } else {
        false
    };
    info!(copied, manifest, "worktree refreshed");

    git.stage_all(&repo)?;
    if git.changed_files(&repo)?.is_empty() {
        prompter.message("Nothing changed", "No changes since the last snapshot.")?;
        return Ok(());
    }

    let Some(note) = prompter.input("Snapshot note (optional)", None)? else {
        return Ok(());
    };
    let note = note.trim();
    let message = snapshot_message((!note.is_empty()).then_some(note));

    let output = git.commit(&repo, &message)?;
    render_result(prompter, "Snapshot", &output)?;
    if !output.success() {
        return Ok(());
    }

    // Upload is best effort; the snapshot itself already succeeded.
    if git.has_remote(&repo, "origin")? {
        if let Some(branch) = git.current_branch(&repo)? {
            let push = git.push(&repo, "origin", &branch)?;
            if push.success() {
                prompter.message("Uploaded", "Snapshot pushed to origin.")?;
            } else {
                warn!(exit_code = push.exit_code(), "snapshot push failed");
                prompter.message(
                    "Upload failed",
                    &format!(
                        "The snapshot is saved locally but could not be pushed:\n\n{}",
                        push.text()
                    ),
                )?;
            }
        }
    }
    Ok(())
}

fn view_changes(
    session: &Session,
    prompter: &dyn Prompter,
    git: &dyn GitClient,
    live_root: &Path,
) -> Result<()> {
    let Some(repo) = require_backup_repo(session, prompter)? else {
        return Ok(());
    };
    refresh_worktree(&repo, live_root, &session.settings().backup.targets)?;

    let status = git.status(&repo)?;
    render_result(prompter, "Status", &status)?;
    let diff = git.diff(&repo)?;
    render_result(prompter, "Changes since last snapshot", &diff)
}

fn restore(
    session: &Session,
    prompter: &dyn Prompter,
    git: &dyn GitClient,
    live_root: &Path,
) -> Result<()> {
    let Some(repo) = require_backup_repo(session, prompter)? else {
        return Ok(());
    };

    let snapshots = git.history(&repo, HISTORY_LIMIT)?;
    if snapshots.is_empty() {
        prompter.message("No snapshots", "There is nothing to restore yet.")?;
        return Ok(());
    }

    let items: Vec<String> = snapshots.iter().map(|s| s.label()).collect();
    let Some(index) = prompter.choose_one("Restore which snapshot?", &items)? else {
        return Ok(());
    };
    let snapshot = &snapshots[index];

    let confirmed = prompter.confirm(&format!(
        "Overwrite the live configuration with snapshot {} ({})?",
        snapshot.hash, snapshot.date
    ))?;
    if !confirmed {
        return Ok(());
    }

    // Materialize the snapshot in the worktree, copy it out, then put the
    // worktree back on HEAD so the next backup diffs against the latest
    // snapshot again.
    git.checkout_paths(&repo, &snapshot.hash, ".")?;
    let restored = restore_to_live(&repo, live_root, &session.settings().backup.targets)?;
    git.reset_hard(&repo)?;

    info!(snapshot = %snapshot.hash, restored, "snapshot restored");
    prompter.message(
        "Restored",
        &format!(
            "Restored {restored} path(s) from snapshot {}. \
             Restart the affected services or reboot to apply.",
            snapshot.hash
        ),
    )?;
    Ok(())
}

fn history(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(repo) = require_backup_repo(session, prompter)? else {
        return Ok(());
    };
    let output = git.log(&repo, HISTORY_LIMIT)?;
    render_result(prompter, "Snapshot history", &output)
}

fn compare(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(repo) = require_backup_repo(session, prompter)? else {
        return Ok(());
    };

    let snapshots = git.history(&repo, HISTORY_LIMIT)?;
    if snapshots.len() < 2 {
        prompter.message("Not enough snapshots", "Comparing needs at least two.")?;
        return Ok(());
    }

    let items: Vec<String> = snapshots.iter().map(|s| s.label()).collect();
    let Some(older) = prompter.choose_one("Older snapshot", &items)? else {
        return Ok(());
    };
    let Some(newer) = prompter.choose_one("Newer snapshot", &items)? else {
        return Ok(());
    };

    let output = git.diff_range(&repo, &snapshots[older].hash, &snapshots[newer].hash)?;
    render_result(
        prompter,
        &format!(
            "{} .. {}",
            snapshots[older].hash, snapshots[newer].hash
        ),
        &output,
    )
}

fn health_check(session: &Session, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let settings = session.settings();
    let repo = settings.backup_repo_dir();

    let mut report = String::new();
    let mark = |ok: bool| if ok { "ok" } else { "MISSING" };

    let _ = writeln!(report, "git:  {}", mark(tool_available("git")));
    let _ = writeln!(report, "ssh:  {}", mark(tool_available("ssh")));
    let _ = writeln!(report, "tar:  {}", mark(tool_available("tar")));
    let _ = writeln!(
        report,
        "opkg: {} (optional, for package manifests)",
        mark(tool_available("opkg"))
    );
    let _ = writeln!(report);

    let repo_ok = backup_repo_ready(&repo) && query::is_git_repo(&repo);
    let _ = writeln!(
        report,
        "backup repository: {} ({})",
        mark(repo_ok),
        repo.display()
    );

    if repo_ok {
        let branch = git
            .current_branch(&repo)?
            .unwrap_or_else(|| "(detached)".to_string());
        let _ = writeln!(report, "branch: {branch}");
        let _ = writeln!(
            report,
            "origin remote: {}",
            mark(git.has_remote(&repo, "origin")?)
        );
        let dirty = git.changed_files(&repo)?;
        let _ = writeln!(
            report,
            "worktree: {}",
            if dirty.is_empty() {
                "clean".to_string()
            } else {
                format!("{} uncommitted change(s)", dirty.len())
            }
        );
    }

    let _ = writeln!(report);
    let _ = writeln!(report, "interval: {}", settings.backup.interval);
    let targets: Vec<String> = settings
        .backup
        .targets
        .iter()
        .map(|t| t.label().to_string())
        .collect();
    let _ = writeln!(report, "targets: {}", targets.join(", "));
    if settings.backup.interval == Interval::Never {
        let _ = writeln!(report, "note: scheduled snapshots are disabled");
    }

    prompter.message("Health check", &report)?;

    if !repo_ok
        && prompter.confirm(&format!(
            "Initialize a backup repository at {}?",
            repo.display()
        ))?
    {
        std::fs::create_dir_all(&repo)?;
        git.init_repo(&repo)?;
        info!(repo = %repo.display(), "backup repository initialized");
        prompter.message(
            "Initialized",
            "Backup repository created. Run 'Backup now' to take the first snapshot.",
        )?;
    }
    Ok(())
}

fn export(session: &Session, prompter: &dyn Prompter) -> Result<()> {
    let repo = session.settings().backup_repo_dir();
    if !backup_repo_ready(&repo) {
        prompter.message(
            "Backup repository not ready",
            "Nothing to export yet. Run the health check to set it up.",
        )?;
        return Ok(());
    }

    let default_dest = format!("/tmp/{}-backup.tar.gz", session.settings().user.router_name);
    let Some(dest) = prompter.input("Archive path", Some(&default_dest))? else {
        return Ok(());
    };
    let dest = dest.trim().to_string();
    if dest.is_empty() {
        return Ok(());
    }

    let output = ProcessBuilder::builder()
        .with_program("tar")
        .with_args(vec![
            "-czf".to_string(),
            dest.clone(),
            "--exclude=.git".to_string(),
            "-C".to_string(),
            repo.display().to_string(),
            ".".to_string(),
        ])
        .build()
        .run_capture()?;

    if output.success() {
        prompter.message("Exported", &format!("Archive written to {dest}."))?;
    } else {
        render_result(prompter, "Export", &output)?;
    }
    Ok(())
}

/// Settings screen, also run right after the wizard on a fresh install.
pub fn edit_settings(
    session: &mut Session,
    prompter: &dyn Prompter,
    store: &SettingsStore,
) -> Result<()> {
    let mut settings = session.settings().clone();

    if let Some(name) = prompter.input("Router name", Some(&settings.user.router_name))?
        && !name.trim().is_empty()
    {
        settings.user.router_name = name.trim().to_string();
    }

    if let Some(user) = prompter.input("GitHub username", Some(&settings.user.github_user))?
        && !user.trim().is_empty()
    {
        settings.user.github_user = user.trim().to_string();
    }

    let repos_dir = settings.storage.repos_dir.display().to_string();
    if let Some(dir) = prompter.input("Repository storage directory", Some(&repos_dir))?
        && !dir.trim().is_empty()
    {
        settings.storage.repos_dir = dir.trim().into();
    }

    let intervals: Vec<String> = Interval::ALL.iter().map(ToString::to_string).collect();
    if let Some(index) = prompter.choose_one("Backup interval", &intervals)? {
        settings.backup.interval = Interval::ALL[index];
    }

    let target_items: Vec<String> = BackupTarget::ALL
        .iter()
        .map(|t| t.label().to_string())
        .collect();
    let defaults: Vec<bool> = BackupTarget::ALL
        .iter()
        .map(|t| settings.backup.targets.contains(t))
        .collect();
    if let Some(picked) = prompter.choose_many("Backup targets", &target_items, &defaults)?
        && !picked.is_empty()
    {
        settings.backup.targets = picked
            .into_iter()
            .filter_map(|i| BackupTarget::ALL.get(i).copied())
            .collect();
    }

    store.save(&settings)?;
    *session.settings_mut() = settings;
    info!("settings updated");
    prompter.message("Settings saved", &format!("Written to {}.", store.path().display()))?;
    Ok(())
}
