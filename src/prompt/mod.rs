// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal prompting capability.
//!
//! ```text
//!          Prompter (trait)
//!          /              \
//!         v                v
//! TerminalPrompter   ScriptedPrompter
//!   dialoguer          canned responses
//!   (real menus)       (tests)
//! ```
//!
//! Cancellation (Esc or an interrupted read) is `None`/"do nothing", never an
//! error; only real terminal I/O failures surface as `Err`.

pub mod scripted;

#[cfg(test)]
mod tests;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{PromptError, WrtResult};

pub use scripted::{Script, ScriptedPrompter};

/// One-selection, multi-selection, free-text and message dialogs.
pub trait Prompter {
    /// Single-choice menu. `None` when the user cancels.
    fn choose_one(&self, title: &str, items: &[String]) -> WrtResult<Option<usize>>;

    /// Multi-choice menu with pre-checked defaults. `None` when cancelled;
    /// an empty vector is a deliberate empty selection.
    fn choose_many(
        &self,
        title: &str,
        items: &[String],
        defaults: &[bool],
    ) -> WrtResult<Option<Vec<usize>>>;

    /// Free-text input, optionally pre-filled. `None` when cancelled.
    fn input(&self, prompt: &str, initial: Option<&str>) -> WrtResult<Option<String>>;

    /// Yes/no confirmation. Cancellation counts as "no".
    fn confirm(&self, prompt: &str) -> WrtResult<bool>;

    /// Blocking message dialog; returns once the user acknowledges.
    fn message(&self, title: &str, body: &str) -> WrtResult<()>;
}

/// Real terminal implementation backed by dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Maps an interrupted read to "cancelled"; other I/O failures stay errors.
fn cancel_on_interrupt<T>(
    result: std::result::Result<T, dialoguer::Error>,
) -> WrtResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(dialoguer::Error::IO(e)) => Err(PromptError::Io(e).into()),
    }
}

impl Prompter for TerminalPrompter {
    fn choose_one(&self, title: &str, items: &[String]) -> WrtResult<Option<usize>> {
        let result = Select::new()
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact_opt();
        Ok(cancel_on_interrupt(result)?.flatten())
    }

    fn choose_many(
        &self,
        title: &str,
        items: &[String],
        defaults: &[bool],
    ) -> WrtResult<Option<Vec<usize>>> {
        let result = MultiSelect::new()
            .with_prompt(title)
            .items(items)
            .defaults(defaults)
            .interact_opt();
        Ok(cancel_on_interrupt(result)?.flatten())
    }

    fn input(&self, prompt: &str, initial: Option<&str>) -> WrtResult<Option<String>> {
        let mut dialog = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(initial) = initial {
            dialog = dialog.with_initial_text(initial);
        }
        cancel_on_interrupt(dialog.interact_text())
    }

    fn confirm(&self, prompt: &str) -> WrtResult<bool> {
        let result = Confirm::new().with_prompt(prompt).default(false).interact_opt();
        Ok(cancel_on_interrupt(result)?.flatten().unwrap_or(false))
    }

    fn message(&self, title: &str, body: &str) -> WrtResult<()> {
        println!("\n=== {title} ===\n");
        if body.trim().is_empty() {
            println!("(no output)");
        } else {
            println!("{body}");
        }
        println!();
        let ack = Input::<String>::new()
            .with_prompt("Press Enter to continue")
            .allow_empty(true)
            .interact_text();
        cancel_on_interrupt(ack)?;
        Ok(())
    }
}
