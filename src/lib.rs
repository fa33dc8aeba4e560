// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!        wrtgit                 wrtbackup
//!           |                       |
//!           +----------+-----------+
//!                      v
//!                 cli (clap)
//!                      |
//!                      v
//!            wizard (first run)
//!                      |
//!                      v
//!              cmd (menu loops)
//!        git_menu / backup_menu / commit / branch
//!            |         |         |
//!            v         v         v
//!         git       backup    locator
//!      trait+CLI   targets   repo scan
//!            |         |
//!            +----+----+
//!                 v
//!        core::process (sync, captured output)
//!
//!   +------------------------------------------+
//!   |  session    settings (TOML store)        |
//!   +------------------------------------------+
//!   |  foundation   error, logging, prompt     |
//!   +------------------------------------------+
//! ```

pub mod backup;
pub mod cli;
pub mod cmd;
pub mod core;
pub mod error;
pub mod git;
pub mod locator;
pub mod logging;
pub mod prompt;
pub mod session;
pub mod settings;
pub mod wizard;
