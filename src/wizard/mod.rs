// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! First-run wizard.
//!
//! ```text
//! 1. ssh key     create ~/.ssh/id_ed25519 unless present (failure is fatal)
//! 2. public key  show it so the user can paste it into GitHub
//! 3. connection  ssh -T git@github.com, best effort
//! 4. identity    github user + router name (cancel keeps a placeholder)
//! 5. storage     root directory for repositories
//! 6. finalize    create the storage root, save the settings file
//! ```
//!
//! The wizard runs linearly, no back navigation. Every step except key
//! creation degrades gracefully; a router without internet access still
//! ends up with a usable settings file.

pub mod keys;


use tracing::{info, warn};

use crate::error::{Result, bail_out};
use crate::prompt::Prompter;
use crate::settings::{PLACEHOLDER_USER, Settings, SettingsStore};

pub use keys::{KeyOps, SshKeyOps};

/// Runs the full wizard and returns the saved settings.
///
/// # Errors
///
/// Fails when key creation fails, when the storage root cannot be created,
/// or when the settings file cannot be written. Cancelled prompts are not
/// errors; they keep the current or placeholder value.
pub fn run(
    prompter: &dyn Prompter,
    keys: &dyn KeyOps,
    store: &SettingsStore,
    mut settings: Settings,
) -> Result<Settings> {
    info!("starting first-run wizard");

    prompter.message(
        "Welcome",
        "No settings found. This wizard sets up the SSH key, your GitHub \
         account and the storage directory for repositories.",
    )?;

    // 1. SSH key.
    if keys.key_exists() {
        info!("ssh key already present, skipping creation");
    } else {
        let output = keys.create_key()?;
        if !output.success() {
            return Err(bail_out(format!(
                "failed to create ssh key: {}",
                output.text()
            ))
            .into());
        }
        info!("ssh key created");
    }

    // 2. Public key for the user to register.
    match keys.public_key() {
        Ok(public_key) => prompter.message(
            "Your public key",
            &format!(
                "Add this key to your GitHub account (Settings > SSH keys):\n\n{public_key}"
            ),
        )?,
        Err(e) => {
            warn!(error = %e, "could not read public key");
            prompter.message(
                "Public key unavailable",
                "The public key could not be read. You can add it to GitHub later.",
            )?;
        }
    }

    // 3. Connectivity check, best effort. GitHub answers a successful key
    // test with exit status 1 and a greeting, so match the text too.
    match keys.test_connection() {
        Ok(output) if output.success() || output.text().contains("successfully authenticated") => {
            prompter.message("Connection test", "GitHub accepted your key.")?;
        }
        Ok(output) => {
            warn!(exit_code = output.exit_code(), "github connection test failed");
            prompter.message(
                "Connection test",
                &format!(
                    "GitHub did not accept the key yet. You can re-check later.\n\n{}",
                    output.text()
                ),
            )?;
        }
        Err(e) => {
            warn!(error = %e, "connection test could not run");
            prompter.message(
                "Connection test",
                "The connection test could not run. Continuing without it.",
            )?;
        }
    }

    // 4. Identity.
    let github_user = prompter.input("GitHub username", None)?;
    settings.user.github_user = match github_user {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => PLACEHOLDER_USER.to_string(),
    };

    let router_name = prompter.input("Router name", Some(&settings.user.router_name))?;
    if let Some(name) = router_name
        && !name.trim().is_empty()
    {
        settings.user.router_name = name.trim().to_string();
    }

    // 5. Storage root, prefilled with the default.
    let current = settings.storage.repos_dir.display().to_string();
    if let Some(dir) = prompter.input("Repository storage directory", Some(&current))?
        && !dir.trim().is_empty()
    {
        settings.storage.repos_dir = dir.trim().into();
    }

    // 6. Finalize.
    std::fs::create_dir_all(&settings.storage.repos_dir)?;
    store.save(&settings)?;
    info!(path = %store.path().display(), "wizard finished, settings saved");

    prompter.message(
        "Setup complete",
        &format!("Settings saved to {}.", store.path().display()),
    )?;

    Ok(settings)
}
