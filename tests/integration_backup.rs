// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the backup tool.
//!
//! Full snapshot and restore cycles against a real repository, with a
//! scratch directory standing in for the router's live filesystem.

use wrtmenu::backup::BackupTarget;
use wrtmenu::cmd::backup_menu;
use wrtmenu::git::client::GitClient;
use wrtmenu::git::shell::ShellGit;
use wrtmenu::git::test_utils::init_test_repo;
use wrtmenu::prompt::{Script, ScriptedPrompter};
use wrtmenu::session::Session;
use wrtmenu::settings::{Settings, SettingsStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    _live: TempDir,
    _storage: TempDir,
    live_root: PathBuf,
    repo: PathBuf,
    session: Session,
    store: SettingsStore,
}

fn fixture(init: bool) -> Fixture {
    let live = tempfile::tempdir().expect("failed to create temp dir");
    let storage = tempfile::tempdir().expect("failed to create temp dir");

    let mut settings = Settings::default();
    settings.storage.repos_dir = storage.path().to_path_buf();
    settings.user.router_name = "router".to_string();
    settings.backup.targets = vec![BackupTarget::Network, BackupTarget::System];

    let repo = settings.backup_repo_dir();
    if init {
        std::fs::create_dir_all(&repo).expect("failed to create repo dir");
        init_test_repo(&repo);
    }

    let store = SettingsStore::new(storage.path().join("settings.toml"));
    let live_root = live.path().to_path_buf();
    Fixture {
        _live: live,
        _storage: storage,
        live_root,
        repo,
        session: Session::new(settings),
        store,
    }
}

fn write_live(live_root: &Path, name: &str, content: &str) {
    let dir = live_root.join("etc/config");
    std::fs::create_dir_all(&dir).expect("failed to create etc/config");
    std::fs::write(dir.join(name), content).expect("failed to write config file");
}

fn run_menu(fx: &mut Fixture, script: Vec<Script>) -> ScriptedPrompter {
    let prompter = ScriptedPrompter::new(script);
    let git = ShellGit::new();
    backup_menu::run(&mut fx.session, &prompter, &git, &fx.store, &fx.live_root)
        .expect("menu flow should succeed");
    prompter
}

fn snapshot(fx: &mut Fixture, note: &str) {
    run_menu(
        fx,
        vec![
            Script::ChooseOne(Some(0)), // Backup now
            Script::Input(Some(note.to_string())),
            Script::ChooseOne(None),
        ],
    );
}

#[test]
fn test_backup_now_snapshots_live_config() {
    let mut fx = fixture(true);
    write_live(&fx.live_root, "network", "config interface 'lan'\n");
    write_live(&fx.live_root, "system", "config system\n");

    snapshot(&mut fx, "first snapshot");

    let git = ShellGit::new();
    let history = git.history(&fx.repo, 10).expect("log should succeed");
    assert_eq!(history.len(), 2, "fixture commit plus the snapshot");
    assert!(history[0].subject.starts_with("Snapshot "));
    assert!(history[0].subject.ends_with(": first snapshot"));
    assert!(fx.repo.join("etc/config/network").exists());
    assert!(fx.repo.join("etc/config/system").exists());
    assert!(
        git.changed_files(&fx.repo).unwrap().is_empty(),
        "snapshot must leave the worktree clean"
    );
}

#[test]
fn test_second_backup_without_changes_creates_no_commit() {
    let mut fx = fixture(true);
    write_live(&fx.live_root, "network", "config interface 'lan'\n");

    snapshot(&mut fx, "first");
    let prompter = run_menu(
        &mut fx,
        vec![Script::ChooseOne(Some(0)), Script::ChooseOne(None)],
    );

    let shown = prompter.messages().join("\n");
    assert!(shown.contains("Nothing changed"), "got: {shown}");

    let git = ShellGit::new();
    let history = git.history(&fx.repo, 10).expect("log should succeed");
    assert_eq!(history.len(), 2);
}

#[test]
fn test_restore_returns_live_tree_to_old_snapshot() {
    let mut fx = fixture(true);
    write_live(&fx.live_root, "network", "config interface 'old'\n");
    snapshot(&mut fx, "old state");

    write_live(&fx.live_root, "network", "config interface 'new'\n");
    snapshot(&mut fx, "new state");

    // History is newest first: [new, old, fixture commit].
    run_menu(
        &mut fx,
        vec![
            Script::ChooseOne(Some(2)), // Restore snapshot
            Script::ChooseOne(Some(1)), // "old state"
            Script::Confirm(true),
            Script::ChooseOne(None),
        ],
    );

    let live = std::fs::read_to_string(fx.live_root.join("etc/config/network"))
        .expect("failed to read live file");
    assert_eq!(live, "config interface 'old'\n");

    // The repository worktree is back on HEAD (the newest snapshot).
    let repo_file = std::fs::read_to_string(fx.repo.join("etc/config/network"))
        .expect("failed to read worktree file");
    assert_eq!(repo_file, "config interface 'new'\n");
    let git = ShellGit::new();
    assert!(git.changed_files(&fx.repo).unwrap().is_empty());
}

#[test]
fn test_compare_shows_diff_between_snapshots() {
    let mut fx = fixture(true);
    write_live(&fx.live_root, "network", "config interface 'old'\n");
    snapshot(&mut fx, "old");
    write_live(&fx.live_root, "network", "config interface 'new'\n");
    snapshot(&mut fx, "new");

    let prompter = run_menu(
        &mut fx,
        vec![
            Script::ChooseOne(Some(4)), // Compare snapshots
            Script::ChooseOne(Some(1)), // older
            Script::ChooseOne(Some(0)), // newer
            Script::ChooseOne(None),
        ],
    );

    let shown = prompter.messages().join("\n");
    assert!(shown.contains("-config interface 'old'"), "got: {shown}");
    assert!(shown.contains("+config interface 'new'"), "got: {shown}");
}

#[test]
fn test_health_check_initializes_missing_repository() {
    let mut fx = fixture(false);

    let prompter = run_menu(
        &mut fx,
        vec![
            Script::ChooseOne(Some(5)), // Health check
            Script::Confirm(true),
            Script::ChooseOne(None),
        ],
    );

    assert!(fx.repo.join(".git").exists(), "repository must be initialized");
    let shown = prompter.messages().join("\n");
    assert!(shown.contains("Backup repository created"), "got: {shown}");
}

#[test]
fn test_export_writes_archive_without_git_metadata() {
    let mut fx = fixture(true);
    write_live(&fx.live_root, "network", "config interface 'lan'\n");
    snapshot(&mut fx, "for export");

    let out = tempfile::tempdir().expect("failed to create temp dir");
    let archive = out.path().join("router-backup.tar.gz");

    run_menu(
        &mut fx,
        vec![
            Script::ChooseOne(Some(6)), // Export archive
            Script::Input(Some(archive.display().to_string())),
            Script::ChooseOne(None),
        ],
    );

    assert!(archive.is_file(), "archive must be written");

    let listing = std::process::Command::new("tar")
        .args(["-tzf", &archive.display().to_string()])
        .output()
        .expect("failed to list archive");
    let listing = String::from_utf8_lossy(&listing.stdout).into_owned();
    assert!(listing.contains("etc/config/network"), "got: {listing}");
    assert!(!listing.contains(".git/"), "got: {listing}");
}
