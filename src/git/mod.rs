// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//! queries (read)    --> query.rs  --> gix (no subprocess)
//! everything else   --> GitClient --> ShellGit --> git CLI
//!                              \
//!                               --> FakeGit (tests)
//! ```
//!
//! Mutations and human-readable output go through the git CLI so the tools
//! behave exactly like the git the user runs by hand (credential helpers,
//! ssh config, hooks). gix covers the hot read-only checks where spawning
//! a subprocess is wasteful.

pub mod client;
pub mod query;
pub mod shell;
pub mod test_utils;


pub use client::{ChangedFile, GitClient, SnapshotEntry};
pub use shell::ShellGit;
