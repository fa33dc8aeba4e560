// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the git-manager menu.
//!
//! Drives full menu flows with a scripted prompter against real temporary
//! repositories and the real git CLI.

use wrtmenu::cmd::git_menu;
use wrtmenu::git::client::GitClient;
use wrtmenu::git::shell::ShellGit;
use wrtmenu::git::test_utils::init_test_repo;
use wrtmenu::prompt::{Script, ScriptedPrompter};
use wrtmenu::session::Session;
use wrtmenu::settings::Settings;
use tempfile::TempDir;

fn repo_session() -> (TempDir, Session) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    init_test_repo(temp.path());

    let mut session = Session::new(Settings::default());
    session.set_active_repo(Some(temp.path().to_path_buf()));
    (temp, session)
}

#[test]
fn test_commit_flow_creates_exactly_one_commit() {
    let (temp, mut session) = repo_session();
    std::fs::write(temp.path().join("etc-dump"), "config\n").expect("failed to write file");

    let prompter = ScriptedPrompter::new([
        Script::ChooseOne(Some(4)),           // Commit changes
        Script::ChooseMany(Some(vec![0])),    // the one changed file
        Script::Input(Some("Add etc dump".to_string())),
        Script::ChooseOne(None),              // leave
    ]);
    let git = ShellGit::new();

    git_menu::run(&mut session, &prompter, &git).expect("menu flow should succeed");

    let history = git.history(temp.path(), 10).expect("log should succeed");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].subject, "Add etc dump");
    assert!(
        git.changed_files(temp.path()).unwrap().is_empty(),
        "worktree must be clean after the commit"
    );
}

#[test]
fn test_commit_flow_with_empty_selection_creates_nothing() {
    let (temp, mut session) = repo_session();
    std::fs::write(temp.path().join("etc-dump"), "config\n").expect("failed to write file");

    let prompter = ScriptedPrompter::new([
        Script::ChooseOne(Some(4)),
        Script::ChooseMany(Some(vec![])),
        Script::ChooseOne(None),
    ]);
    let git = ShellGit::new();

    git_menu::run(&mut session, &prompter, &git).expect("menu flow should succeed");

    let history = git.history(temp.path(), 10).expect("log should succeed");
    assert_eq!(history.len(), 1, "only the fixture commit may exist");
    let shown = prompter.messages().join("\n");
    assert!(shown.contains("Commit aborted"), "got: {shown}");
}

#[test]
fn test_branch_create_and_switch_flow() {
    let (temp, mut session) = repo_session();

    let prompter = ScriptedPrompter::new([
        Script::ChooseOne(Some(5)),                    // Branches
        Script::ChooseOne(Some(2)),                    // Create branch
        Script::Input(Some("feature".to_string())),
        Script::ChooseOne(Some(1)),                    // Switch branch
        Script::ChooseOne(Some(0)),                    // only "main" is offered
        Script::ChooseOne(Some(3)),                    // Back
        Script::ChooseOne(None),
    ]);
    let git = ShellGit::new();

    git_menu::run(&mut session, &prompter, &git).expect("menu flow should succeed");

    assert_eq!(
        git.current_branch(temp.path()).unwrap().as_deref(),
        Some("main"),
        "flow ends back on main after creating feature"
    );
    let mut branches = git.local_branches(temp.path()).unwrap();
    branches.sort();
    assert_eq!(branches, vec!["feature".to_string(), "main".to_string()]);
}

#[test]
fn test_pull_on_repo_without_remote_reports_and_continues() {
    let (_temp, mut session) = repo_session();

    let prompter = ScriptedPrompter::new([
        Script::ChooseOne(Some(2)), // Pull
        Script::ChooseOne(None),
    ]);
    let git = ShellGit::new();

    git_menu::run(&mut session, &prompter, &git).expect("menu flow should succeed");
    let shown = prompter.messages().join("\n");
    assert!(shown.contains("No origin remote"), "got: {shown}");
}

#[test]
fn test_clone_flow_from_local_source() {
    let source = tempfile::tempdir().expect("failed to create temp dir");
    init_test_repo(source.path());

    let storage = tempfile::tempdir().expect("failed to create temp dir");
    let mut settings = Settings::default();
    settings.storage.repos_dir = storage.path().to_path_buf();
    let mut session = Session::new(settings);

    let prompter = ScriptedPrompter::new([
        Script::ChooseOne(Some(6)), // Clone repository
        Script::Input(Some(source.path().display().to_string())),
        Script::ChooseOne(None),
    ]);
    let git = ShellGit::new();

    git_menu::run(&mut session, &prompter, &git).expect("menu flow should succeed");

    let dest = storage
        .path()
        .join(source.path().file_name().expect("temp dir has a name"));
    assert!(dest.join(".git").exists(), "clone must land under the storage root");
    assert!(
        session.active_repo().is_none(),
        "cloning must not change the selection"
    );
}
