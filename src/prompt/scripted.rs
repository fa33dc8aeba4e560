// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted prompter for tests.
//!
//! Feeds a fixed queue of responses to whatever dialogs the code under test
//! opens, and records every message dialog so assertions can check what the
//! user would have seen.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::Prompter;
use crate::error::{PromptError, WrtResult};

/// One scripted response.
#[derive(Debug, Clone)]
pub enum Script {
    /// Response to `choose_one`; `None` cancels.
    ChooseOne(Option<usize>),
    /// Response to `choose_many`; `None` cancels.
    ChooseMany(Option<Vec<usize>>),
    /// Response to `input`; `None` cancels.
    Input(Option<String>),
    /// Response to `confirm`.
    Confirm(bool),
}

/// Prompter that replays a fixed script instead of touching the terminal.
///
/// Responses are consumed in order regardless of dialog kind; a mismatch
/// between the script and the dialogs actually opened is a test bug and
/// panics with the offending prompt text. Message dialogs consume nothing
/// and are recorded verbatim.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    responses: Mutex<VecDeque<Script>>,
    messages: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new(responses: impl IntoIterator<Item = Script>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Every `message` dialog shown so far, as "title: body" lines.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// True once every scripted response has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.responses.lock().unwrap().is_empty()
    }

    fn next(&self, prompt: &str) -> WrtResult<Script> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| {
                PromptError::Exhausted {
                    prompt: prompt.to_string(),
                }
                .into()
            })
    }
}

impl Prompter for ScriptedPrompter {
    fn choose_one(&self, title: &str, _items: &[String]) -> WrtResult<Option<usize>> {
        match self.next(title)? {
            Script::ChooseOne(choice) => Ok(choice),
            other => panic!("expected ChooseOne for '{title}', script had {other:?}"),
        }
    }

    fn choose_many(
        &self,
        title: &str,
        _items: &[String],
        _defaults: &[bool],
    ) -> WrtResult<Option<Vec<usize>>> {
        match self.next(title)? {
            Script::ChooseMany(choice) => Ok(choice),
            other => panic!("expected ChooseMany for '{title}', script had {other:?}"),
        }
    }

    fn input(&self, prompt: &str, _initial: Option<&str>) -> WrtResult<Option<String>> {
        match self.next(prompt)? {
            Script::Input(text) => Ok(text),
            other => panic!("expected Input for '{prompt}', script had {other:?}"),
        }
    }

    fn confirm(&self, prompt: &str) -> WrtResult<bool> {
        match self.next(prompt)? {
            Script::Confirm(answer) => Ok(answer),
            other => panic!("expected Confirm for '{prompt}', script had {other:?}"),
        }
    }

    fn message(&self, title: &str, body: &str) -> WrtResult<()> {
        self.messages
            .lock()
            .unwrap()
            .push(format!("{title}: {body}"));
        Ok(())
    }
}
