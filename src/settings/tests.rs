// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Interval, PLACEHOLDER_USER, Settings, SettingsStore};
use crate::backup::BackupTarget;
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_store() -> (TempDir, SettingsStore) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let store = SettingsStore::new(temp.path().join("settings.toml"));
    (temp, store)
}

#[test]
fn test_load_absent_file_yields_defaults_and_first_run() {
    let (_temp, store) = temp_store();

    let loaded = store.load().expect("absent file must not be an error");
    assert!(loaded.first_run);
    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.settings.user.github_user, PLACEHOLDER_USER);
    assert_eq!(loaded.settings.backup.interval, Interval::Daily);
    assert_eq!(
        loaded.settings.backup.targets,
        vec![BackupTarget::Everything]
    );
}

#[test]
fn test_save_then_load_round_trip() {
    let (_temp, store) = temp_store();

    let mut settings = Settings::default();
    settings.user.github_user = "alice".to_string();
    settings.user.router_name = "attic-ap".to_string();
    settings.storage.repos_dir = PathBuf::from("/mnt/data/repos");
    settings.backup.interval = Interval::Weekly;
    settings.backup.targets = vec![BackupTarget::Network, BackupTarget::Wireless];

    store.save(&settings).expect("save should succeed");
    let loaded = store.load().expect("load should succeed");

    assert!(!loaded.first_run);
    assert_eq!(loaded.settings, settings);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let store = SettingsStore::new(temp.path().join("nested/deeper/settings.toml"));

    store
        .save(&Settings::default())
        .expect("save should create parent dirs");
    assert!(store.path().exists());
}

#[test]
fn test_load_tolerates_unknown_keys() {
    let (_temp, store) = temp_store();
    std::fs::write(
        store.path(),
        r#"
[user]
github_user = "bob"
some_future_key = "ignored"

[unknown_section]
x = 1
"#,
    )
    .expect("failed to write settings file");

    let loaded = store.load().expect("unknown keys must be tolerated");
    assert_eq!(loaded.settings.user.github_user, "bob");
    // Missing keys fall back to defaults.
    assert_eq!(loaded.settings.user.router_name, "openwrt");
    assert_eq!(loaded.settings.backup.interval, Interval::Daily);
}

#[test]
fn test_load_rejects_malformed_file() {
    let (_temp, store) = temp_store();
    std::fs::write(store.path(), "this is not [ toml").expect("failed to write settings file");
    assert!(store.load().is_err());
}

#[test]
fn test_save_overwrites_wholesale() {
    let (_temp, store) = temp_store();

    let mut first = Settings::default();
    first.backup.targets = vec![BackupTarget::Network, BackupTarget::Firewall];
    store.save(&first).expect("save should succeed");

    let mut second = Settings::default();
    second.backup.targets = vec![BackupTarget::System];
    store.save(&second).expect("save should succeed");

    let loaded = store.load().expect("load should succeed");
    assert_eq!(loaded.settings.backup.targets, vec![BackupTarget::System]);
}

#[test]
fn test_backup_repo_dir_joins_router_name() {
    let mut settings = Settings::default();
    settings.storage.repos_dir = PathBuf::from("/mnt/data/repos");
    settings.user.router_name = "garage".to_string();
    assert_eq!(
        settings.backup_repo_dir(),
        PathBuf::from("/mnt/data/repos/garage")
    );
}

#[test]
fn test_interval_parse_and_display() {
    assert_eq!("weekly".parse::<Interval>().unwrap(), Interval::Weekly);
    assert_eq!("DAILY".parse::<Interval>().unwrap(), Interval::Daily);
    assert!("fortnightly".parse::<Interval>().is_err());
    assert_eq!(Interval::Never.to_string(), "never");
}
