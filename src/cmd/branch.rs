// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch submenu: list, switch, create.

use std::path::Path;

use super::render_result;
use crate::error::Result;
use crate::git::GitClient;
use crate::prompt::Prompter;

const MENU: [&str; 4] = [
    "Show all branches",
    "Switch branch",
    "Create branch",
    "Back",
];

pub fn run(repo: &Path, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    loop {
        let items: Vec<String> = MENU.iter().map(ToString::to_string).collect();
        let Some(choice) = prompter.choose_one("Branches", &items)? else {
            return Ok(());
        };

        match choice {
            0 => {
                let output = git.all_branches(repo)?;
                render_result(prompter, "All branches", &output)?;
            }
            1 => switch(repo, prompter, git)?,
            2 => create(repo, prompter, git)?,
            _ => return Ok(()),
        }
    }
}

/// Switch targets are local branches only; remote-tracking refs would need
/// a checkout -b dance that does not belong in a two-keystroke menu.
fn switch(repo: &Path, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let current = git.current_branch(repo)?;
    let branches: Vec<String> = git
        .local_branches(repo)?
        .into_iter()
        .filter(|name| Some(name) != current.as_ref())
        .collect();

    if branches.is_empty() {
        prompter.message("No other branches", "There is nothing to switch to.")?;
        return Ok(());
    }

    if let Some(index) = prompter.choose_one("Switch to", &branches)? {
        let output = git.checkout(repo, &branches[index])?;
        render_result(prompter, "Switch branch", &output)?;
    }
    Ok(())
}

fn create(repo: &Path, prompter: &dyn Prompter, git: &dyn GitClient) -> Result<()> {
    let Some(name) = prompter.input("New branch name", None)? else {
        return Ok(());
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        return Ok(());
    }

    let output = git.create_branch(repo, &name)?;
    render_result(prompter, "Create branch", &output)
}
