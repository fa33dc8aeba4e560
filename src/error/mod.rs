// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              WrtError
//!                  |
//!    +------+------+------+------+
//!    |      |      |      |      |
//!    v      v      v      v      v
//!  Bail   Git  Settings Process Prompt  Io/Other
//!         Box    Box     Box     Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      Gix, CommandFailed, RepoNotFound, Detached
//!   Settings ReadError, ParseError, WriteError, InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed, OutputError
//!   Prompt   Io, Closed
//!
//! All variants boxed => WrtError stays small on the stack.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`WrtError`].
pub type WrtResult<T> = std::result::Result<T, WrtError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum WrtError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Settings file error.
    #[error("settings error: {0}")]
    Settings(#[from] Box<SettingsError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Terminal prompt error.
    #[error("prompt error: {0}")]
    Prompt(#[from] Box<PromptError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`WrtError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> WrtError {
    WrtError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for WrtError {
                fn from(err: $error) -> Self {
                    WrtError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    SettingsError => Settings,
    ProcessError => Process,
    PromptError => Prompt,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// gix has multiple error types that are converted through this enum.
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the specified path.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// Git command execution failed before producing an exit status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Output of a git query could not be parsed.
    #[error("unparseable git output from '{command}': {message}")]
    UnparseableOutput { command: String, message: String },
}

// --- Settings Errors ---

/// Settings-file errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read the settings file.
    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the settings file.
    #[error("failed to parse settings file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Failed to write the settings file.
    #[error("failed to write settings file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid settings value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Prompt Errors ---

/// Terminal prompt errors.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Underlying terminal I/O failed.
    #[error("terminal io error: {0}")]
    Io(#[from] std::io::Error),

    /// The scripted prompter ran out of responses (tests only).
    #[error("no scripted response left for '{prompt}'")]
    Exhausted { prompt: String },
}

#[cfg(test)]
mod tests;
