// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI entry for both binaries using clap derive.
//!
//! The menus themselves are fully interactive - there are no operation flags.
//! Only ambient options are exposed:
//!
//! ```text
//! wrtgit    [--log-level N] [--log-file FILE] [--settings FILE]
//! wrtbackup [--log-level N] [--log-file FILE] [--settings FILE]
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::logging::{LogConfig, LogLevel};

/// Interactive git and settings-backup menus for OpenWrt routers.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Interactive git and settings-backup menus for OpenWrt routers",
    long_about = "wrtmenu Copyright (C) 2026 wrtmenu contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Both tools are fully interactive: start them without arguments\n\
                  and pick actions from the menu. On the very first start a short\n\
                  wizard creates an SSH key and collects the initial settings."
)]
pub struct Cli {
    /// Global options shared by both tools
    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Ambient options available for both tools.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GlobalOptions {
    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Alternate settings file.
    #[arg(long = "settings", value_name = "FILE", env = "WRTMENU_SETTINGS")]
    pub settings: Option<PathBuf>,
}

impl GlobalOptions {
    /// Builds the logging configuration from the ambient options.
    ///
    /// The console defaults to warnings only so the log stream does not fight
    /// the interactive menus for the terminal; a log file gets the full trace.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(LogLevel::WARN);

        LogConfig::builder()
            .with_console_level(console_level)
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .build()
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

#[cfg(test)]
mod tests;
