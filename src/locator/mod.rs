// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository discovery for the selection menu.
//!
//! ```text
//! search roots (home, repos_dir)
//!        |
//!        v
//!   WalkBuilder (bounded depth, no ignore files)
//!        |
//!        v
//!   dirs containing .git --> canonicalize --> BTreeSet --> sorted Vec
//! ```
//!
//! Overlapping roots are fine: canonicalization dedups a repository that is
//! reachable from more than one root. Unreadable directories are skipped,
//! never fatal.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::settings::Settings;

/// Walk depth below each search root. Keeps the scan fast on routers with
/// deep mounted filesystems.
pub const MAX_DEPTH: usize = 4;

/// The roots scanned for repositories: the home directory and the
/// configured storage root.
#[must_use]
pub fn default_search_roots(settings: &Settings) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(home) = dirs::home_dir() {
        roots.push(home);
    }
    roots.push(settings.storage.repos_dir.clone());
    roots
}

/// Scans the given roots for git work trees, sorted and deduplicated.
///
/// Hidden directories are not descended into, so nested `.git` internals
/// are never scanned. Ignore files do not apply here; a repository listed
/// in some `.gitignore` is still a repository.
#[must_use]
pub fn find_repos(search_roots: &[PathBuf], max_depth: usize) -> Vec<PathBuf> {
    let mut found = BTreeSet::new();

    for root in search_roots {
        if !root.is_dir() {
            trace!(root = %root.display(), "search root absent, skipping");
            continue;
        }

        let walker = ignore::WalkBuilder::new(root)
            .max_depth(Some(max_depth))
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .build();

        for entry in walker.flatten() {
            let path = entry.path();
            if entry.file_type().is_some_and(|t| t.is_dir()) && is_work_tree(path) {
                match path.canonicalize() {
                    Ok(canonical) => {
                        found.insert(canonical);
                    }
                    Err(e) => trace!(path = %path.display(), error = %e, "canonicalize failed"),
                }
            }
        }
    }

    debug!(count = found.len(), "repository scan done");
    found.into_iter().collect()
}

/// True when the directory itself holds a `.git` entry.
///
/// Deliberately cheaper than full discovery: the scan only wants work tree
/// roots, not every subdirectory inside a repository.
fn is_work_tree(path: &Path) -> bool {
    path.join(".git").exists()
}
