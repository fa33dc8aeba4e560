// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::parse_from;
use crate::logging::LogLevel;

#[test]
fn test_parse_no_arguments() {
    let cli = parse_from(["wrtgit"]);
    assert!(cli.global.log_level.is_none());
    assert!(cli.global.log_file.is_none());
    assert!(cli.global.settings.is_none());
}

#[test]
fn test_parse_ambient_options() {
    let cli = parse_from([
        "wrtbackup",
        "--log-level",
        "4",
        "--log-file",
        "/tmp/wrtbackup.log",
        "--settings",
        "/tmp/settings.toml",
    ]);
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/wrtbackup.log"))
    );
    assert_eq!(
        cli.global.settings.as_deref(),
        Some(std::path::Path::new("/tmp/settings.toml"))
    );
}

#[test]
fn test_log_config_defaults_to_warn_console() {
    let cli = parse_from(["wrtgit"]);
    let config = cli.global.log_config();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert!(config.log_file().is_none());
}

#[test]
fn test_log_config_honors_level_and_file() {
    let cli = parse_from(["wrtgit", "-l", "5", "--log-file", "menu.log"]);
    let config = cli.global.log_config();
    assert_eq!(config.console_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), Some("menu.log"));
}
