// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Prompter, Script, ScriptedPrompter};

#[test]
fn test_scripted_replays_in_order() {
    let prompter = ScriptedPrompter::new([
        Script::ChooseOne(Some(2)),
        Script::Input(Some("note".to_string())),
        Script::Confirm(true),
    ]);

    let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(
        prompter.choose_one("pick", &items).unwrap(),
        Some(2)
    );
    assert_eq!(
        prompter.input("note?", None).unwrap(),
        Some("note".to_string())
    );
    assert!(prompter.confirm("sure?").unwrap());
    assert!(prompter.is_exhausted());
}

#[test]
fn test_scripted_cancel_paths() {
    let prompter = ScriptedPrompter::new([
        Script::ChooseOne(None),
        Script::ChooseMany(None),
        Script::Input(None),
        Script::Confirm(false),
    ]);

    let items = vec!["only".to_string()];
    assert_eq!(prompter.choose_one("pick", &items).unwrap(), None);
    assert_eq!(
        prompter.choose_many("pick many", &items, &[false]).unwrap(),
        None
    );
    assert_eq!(prompter.input("text?", None).unwrap(), None);
    assert!(!prompter.confirm("sure?").unwrap());
}

#[test]
fn test_scripted_records_messages_without_consuming() {
    let prompter = ScriptedPrompter::new([Script::Confirm(true)]);

    prompter.message("Status", "clean").unwrap();
    prompter.message("Log", "one commit").unwrap();
    assert!(prompter.confirm("proceed?").unwrap());

    assert_eq!(
        prompter.messages(),
        vec!["Status: clean".to_string(), "Log: one commit".to_string()]
    );
}

#[test]
fn test_scripted_errors_when_exhausted() {
    let prompter = ScriptedPrompter::new([]);
    let items = vec!["only".to_string()];
    let err = prompter.choose_one("pick", &items).unwrap_err();
    assert!(err.to_string().contains("pick"), "got: {err}");
}

#[test]
#[should_panic(expected = "expected Input")]
fn test_scripted_panics_on_dialog_kind_mismatch() {
    let prompter = ScriptedPrompter::new([Script::Confirm(true)]);
    let _ = prompter.input("text?", None);
}
