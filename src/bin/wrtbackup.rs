// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point of the backup tool.
//!
//! ```text
//! cli::parse() --> Logging --> tools check --> settings (wizard on first run)
//!   --> backup_menu::run  (live root: /)
//! ```

use std::path::Path;
use std::process::ExitCode;

use wrtmenu::cli;
use wrtmenu::cmd::backup_menu;
use wrtmenu::core::process::require_tools;
use wrtmenu::error::Result;
use wrtmenu::git::ShellGit;
use wrtmenu::logging::init_logging;
use wrtmenu::prompt::TerminalPrompter;
use wrtmenu::session::Session;
use wrtmenu::settings::SettingsStore;
use wrtmenu::wizard::{self, SshKeyOps};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Snapshots read the running system's configuration tree.
const LIVE_ROOT: &str = "/";

fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    require_tools(&["git", "ssh", "ssh-keygen", "tar"])?;

    let store = cli
        .global
        .settings
        .clone()
        .map_or_else(SettingsStore::at_default_path, SettingsStore::new);
    let loaded = store.load()?;

    let prompter = TerminalPrompter::new();
    let first_run = loaded.first_run;
    let settings = if first_run {
        wizard::run(&prompter, &SshKeyOps::new(), &store, loaded.settings)?
    } else {
        loaded.settings
    };

    let mut session = Session::new(settings);

    // A fresh install goes straight to the backup settings so the first
    // snapshot covers what the user actually wants.
    if first_run {
        backup_menu::edit_settings(&mut session, &prompter, &store)?;
    }

    let git = ShellGit::new();
    backup_menu::run(&mut session, &prompter, &git, &store, Path::new(LIVE_ROOT))
}
