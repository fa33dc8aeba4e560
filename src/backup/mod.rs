// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backup domain: configuration categories and worktree transfer.
//!
//! ```text
//! BackupTarget          category -> paths under the live root
//! refresh_worktree      live tree  -> snapshot worktree
//! restore_to_live       snapshot worktree -> live tree
//! write_package_manifest  opkg list-installed -> manifest file
//! snapshot_message      timestamped commit subject
//! ```
//!
//! A snapshot is a commit in the backup repository; these helpers only move
//! file contents between the live configuration tree and the repository
//! worktree. Committing is the menu handler's job.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::process::{ProcessBuilder, tool_available};
use crate::error::{Result, WrtResult};
use anyhow::Context;

/// Relative path of the generated package manifest inside a snapshot.
pub const PACKAGE_MANIFEST: &str = "etc/backup/installed-packages.txt";

/// One backed-up configuration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupTarget {
    Network,
    Wireless,
    Firewall,
    Dhcp,
    System,
    Packages,
    Everything,
}

impl BackupTarget {
    /// Every selectable category, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Network,
        Self::Wireless,
        Self::Firewall,
        Self::Dhcp,
        Self::System,
        Self::Packages,
        Self::Everything,
    ];

    /// Human-readable menu label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Network => "Network interfaces",
            Self::Wireless => "Wireless (incl. credentials)",
            Self::Firewall => "Firewall rules",
            Self::Dhcp => "DHCP / DNS",
            Self::System => "System settings",
            Self::Packages => "Installed packages",
            Self::Everything => "Everything under /etc/config",
        }
    }

    /// Paths covered by this category, relative to the live root (`/`).
    ///
    /// `Everything` maps to the whole UCI config directory; the others map to
    /// single UCI files inside it.
    #[must_use]
    pub const fn relative_paths(&self) -> &'static [&'static str] {
        match self {
            Self::Network => &["etc/config/network"],
            Self::Wireless => &["etc/config/wireless"],
            Self::Firewall => &["etc/config/firewall"],
            Self::Dhcp => &["etc/config/dhcp"],
            Self::System => &["etc/config/system"],
            Self::Packages => &["etc/config/opkg"],
            Self::Everything => &["etc/config"],
        }
    }
}

impl std::fmt::Display for BackupTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// True when the selection calls for a package manifest in the snapshot.
#[must_use]
pub fn wants_manifest(targets: &[BackupTarget]) -> bool {
    targets
        .iter()
        .any(|t| matches!(t, BackupTarget::Packages | BackupTarget::Everything))
}

/// Commit subject for a new snapshot.
#[must_use]
pub fn snapshot_message(note: Option<&str>) -> String {
    let stamp = Local::now().format("%Y-%m-%d %H:%M");
    match note {
        Some(note) if !note.trim().is_empty() => format!("Snapshot {stamp}: {}", note.trim()),
        _ => format!("Snapshot {stamp}"),
    }
}

/// Copies the selected categories from the live tree into the repository
/// worktree. Missing live paths are skipped (a router may have no wireless
/// config at all). Returns the number of files copied.
///
/// # Errors
///
/// Returns an error when a copy or directory creation fails.
pub fn refresh_worktree(repo: &Path, live_root: &Path, targets: &[BackupTarget]) -> Result<usize> {
    transfer(live_root, repo, targets)
}

/// Copies the selected categories from the repository worktree back into the
/// live tree. Returns the number of files copied.
///
/// # Errors
///
/// Returns an error when a copy or directory creation fails.
pub fn restore_to_live(repo: &Path, live_root: &Path, targets: &[BackupTarget]) -> Result<usize> {
    transfer(repo, live_root, targets)
}

fn transfer(from_root: &Path, to_root: &Path, targets: &[BackupTarget]) -> Result<usize> {
    let mut copied = 0;
    for target in targets {
        for rel in target.relative_paths() {
            let src = from_root.join(rel);
            if !src.exists() {
                debug!(path = %src.display(), "skipping missing path");
                continue;
            }
            copied += copy_entry(&src, &to_root.join(rel))?;
        }
    }
    Ok(copied)
}

/// Copies one file or directory tree, creating parent directories as needed.
fn copy_entry(src: &Path, dst: &Path) -> Result<usize> {
    if src.is_dir() {
        let mut copied = 0;
        std::fs::create_dir_all(dst)
            .with_context(|| format!("failed to create {}", dst.display()))?;
        for entry in std::fs::read_dir(src)
            .with_context(|| format!("failed to read {}", src.display()))?
        {
            let entry = entry.with_context(|| format!("failed to read entry in {}", src.display()))?;
            let name = entry.file_name();
            // A snapshot worktree carries repository metadata next to the
            // copied tree; never drag it across.
            if name == ".git" {
                continue;
            }
            copied += copy_entry(&entry.path(), &dst.join(name))?;
        }
        Ok(copied)
    } else {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::copy(src, dst).with_context(|| {
            format!("failed to copy {} to {}", src.display(), dst.display())
        })?;
        Ok(1)
    }
}

/// Writes the installed-package manifest into the snapshot worktree.
///
/// Best-effort: returns `Ok(false)` when `opkg` is not on PATH or exits
/// non-zero, so a snapshot taken off-router still succeeds.
///
/// # Errors
///
/// Returns an error only when the manifest file itself cannot be written.
pub fn write_package_manifest(repo: &Path) -> WrtResult<bool> {
    if !tool_available("opkg") {
        warn!("opkg not found, skipping package manifest");
        return Ok(false);
    }

    let output = ProcessBuilder::builder()
        .with_program("opkg")
        .with_args(vec!["list-installed".to_string()])
        .build()
        .run_capture()?;

    if !output.success() {
        warn!(exit_code = output.exit_code(), "opkg list-installed failed");
        return Ok(false);
    }

    let manifest = repo.join(PACKAGE_MANIFEST);
    if let Some(parent) = manifest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&manifest, format!("{}\n", output.text()))?;
    Ok(true)
}
