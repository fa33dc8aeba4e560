// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitError, SettingsError, WrtError, WrtResult, bail_out};

#[test]
fn test_settings_error_display() {
    let err = SettingsError::InvalidValue {
        key: "backup.interval".to_string(),
        message: "expected hourly, daily, weekly or never".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "invalid value for 'backup.interval': expected hourly, daily, weekly or never"
    );
}

#[test]
fn test_git_error_boxes_into_wrt_error() {
    let err: WrtError = GitError::RepoNotFound {
        path: "/tmp/nowhere".to_string(),
    }
    .into();
    assert!(err.to_string().contains("/tmp/nowhere"));
}

#[test]
fn test_bail_out_is_fatal_variant() {
    let err = bail_out("ssh-keygen failed");
    assert!(matches!(err, WrtError::Bailed(_)));
    assert_eq!(err.to_string(), "fatal error: ssh-keygen failed");
}

#[test]
fn test_wrt_error_size() {
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<WrtError>();
    assert!(size <= 24, "WrtError is {size} bytes, expected <= 24");
}

#[test]
fn test_wrt_result_size() {
    let size = std::mem::size_of::<WrtResult<()>>();
    assert!(size <= 24, "WrtResult<()> is {size} bytes, expected <= 24");
}
