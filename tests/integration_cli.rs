// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the ambient options and the wizard's key handling.

use wrtmenu::cli;
use wrtmenu::core::process::tool_available;
use wrtmenu::settings::{Settings, SettingsStore};
use wrtmenu::wizard::{KeyOps, SshKeyOps};

#[test]
fn test_settings_flag_selects_the_store_path() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp.path().join("alt-settings.toml");

    let parsed = cli::parse_from([
        "wrtgit",
        "--settings",
        &path.display().to_string(),
    ]);
    let store = SettingsStore::new(
        parsed.global.settings.expect("flag must be picked up"),
    );

    let mut settings = Settings::default();
    settings.user.router_name = "cli-test".to_string();
    store.save(&settings).expect("save should succeed");

    let loaded = store.load().expect("load should succeed");
    assert_eq!(loaded.settings.user.router_name, "cli-test");
    assert!(path.is_file());
}

#[test]
fn test_key_creation_round_trip() {
    if !tool_available("ssh-keygen") {
        // Not present on this machine; the binaries refuse to start without
        // it, so there is nothing to test here.
        return;
    }

    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let key_path = temp.path().join("keys/id_ed25519");
    let keys = SshKeyOps::with_paths(key_path.clone(), "git@github.com");

    assert!(!keys.key_exists());
    let output = keys.create_key().expect("keygen should run");
    assert!(output.success(), "keygen failed: {}", output.text());
    assert!(keys.key_exists());
    assert!(key_path.is_file());

    let public_key = keys.public_key().expect("public key must be readable");
    assert!(public_key.starts_with("ssh-ed25519 "), "got: {public_key}");
    assert!(public_key.ends_with("wrtmenu"), "got: {public_key}");
}
