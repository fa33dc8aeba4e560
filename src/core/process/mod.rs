// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution with captured output.
//!
//! ```text
//! ProcessBuilder
//!   program, args, cwd, env
//!        |
//!        v
//!    run_capture()
//!        |
//!        v
//!   CommandOutput { exit_code, text (stdout+stderr merged) }
//! ```
//!
//! Every external command blocks the whole process until it returns; there is
//! deliberately no timeout. A non-zero exit status is data for the caller to
//! branch on, never an error - only a failure to spawn or to decode the
//! output is an `Err`.

use bon::Builder;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, trace};

use crate::error::{ProcessError, WrtResult};

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    exit_code: i32,
    text: String,
}

impl CommandOutput {
    pub(crate) const fn new(exit_code: i32, text: String) -> Self {
        Self { exit_code, text }
    }

    /// Numeric exit status (-1 if the process was killed by a signal).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Merged stdout + stderr text, trimmed of trailing whitespace.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the command exited with status zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Builder for one synchronous external command.
#[derive(Debug, Clone, Builder)]
pub struct ProcessBuilder {
    /// Program name or path.
    #[builder(setters(name = with_program), into)]
    program: String,
    /// Command-line arguments.
    #[builder(setters(name = with_args), default)]
    args: Vec<String>,
    /// Working directory for the child process.
    #[builder(setters(name = with_cwd))]
    cwd: Option<PathBuf>,
    /// Extra environment variables.
    #[builder(setters(name = with_envs), default)]
    envs: Vec<(String, String)>,
}

impl ProcessBuilder {
    /// Full command line as a string (for logging and error messages).
    fn command_line(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            if arg.contains(' ') {
                use std::fmt::Write as _;
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                use std::fmt::Write as _;
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Runs the command, blocking until it exits, and captures its output.
    ///
    /// Stdout and stderr are merged into one text blob in that order, the way
    /// the result dialogs present them.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::SpawnFailed` if the child cannot be started.
    /// A non-zero exit status is NOT an error.
    pub fn run_capture(&self) -> WrtResult<CommandOutput> {
        let cmd_line = self.command_line();

        if let Some(cwd) = &self.cwd {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        command.stdin(std::process::Stdio::null());

        let output = command.output().map_err(|e| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source: e,
        })?;

        let exit_code = output.status.code().unwrap_or(-1);

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !text.trim().is_empty() {
                text.push('\n');
            }
            text.push_str(stderr.trim_end());
        }
        let text = text.trim_end().to_string();

        trace!(cmd = %cmd_line, exit_code, "completed");
        Ok(CommandOutput::new(exit_code, text))
    }
}

/// Checks that every named tool resolves on PATH.
///
/// Called once per binary before any menu is shown; a missing tool is fatal.
///
/// # Errors
///
/// Returns a `ProcessError::ExecutableNotFound` naming the first missing tool.
pub fn require_tools(names: &[&str]) -> WrtResult<()> {
    for name in names {
        if which::which(name).is_err() {
            return Err(ProcessError::ExecutableNotFound {
                name: (*name).to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// True when the named tool resolves on PATH (for optional tools like opkg).
#[must_use]
pub fn tool_available(name: &str) -> bool {
    which::which(name).is_ok()
}
