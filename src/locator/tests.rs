// wrtmenu: OpenWrt Git & Backup Menus
//
// SPDX-FileCopyrightText: 2026 wrtmenu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{MAX_DEPTH, default_search_roots, find_repos};
use crate::settings::Settings;
use std::path::{Path, PathBuf};

fn make_repo(root: &Path, rel: &str) -> PathBuf {
    let dir = root.join(rel);
    std::fs::create_dir_all(dir.join(".git")).expect("failed to create repo dir");
    dir
}

#[test]
fn test_finds_repos_under_root() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    make_repo(temp.path(), "one");
    make_repo(temp.path(), "nested/two");
    std::fs::create_dir_all(temp.path().join("not-a-repo")).expect("failed to create dir");

    let repos = find_repos(&[temp.path().to_path_buf()], MAX_DEPTH);
    assert_eq!(repos.len(), 2);
    assert!(repos.iter().any(|p| p.ends_with("one")));
    assert!(repos.iter().any(|p| p.ends_with("two")));
}

#[test]
fn test_overlapping_roots_dedup() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = make_repo(temp.path(), "sub/repo");

    // Same repository reachable from both roots.
    let repos = find_repos(
        &[temp.path().to_path_buf(), temp.path().join("sub")],
        MAX_DEPTH,
    );
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0], repo.canonicalize().expect("canonicalize failed"));
}

#[test]
fn test_depth_limit_respected() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    make_repo(temp.path(), "a/b/c/d/deep");

    assert!(find_repos(&[temp.path().to_path_buf()], 2).is_empty());
    assert_eq!(find_repos(&[temp.path().to_path_buf()], 5).len(), 1);
}

#[test]
fn test_hidden_directories_not_descended() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    make_repo(temp.path(), ".cache/hidden-repo");
    make_repo(temp.path(), "visible");

    let repos = find_repos(&[temp.path().to_path_buf()], MAX_DEPTH);
    assert_eq!(repos.len(), 1);
    assert!(repos[0].ends_with("visible"));
}

#[test]
fn test_absent_root_is_skipped() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    make_repo(temp.path(), "here");

    let repos = find_repos(
        &[
            temp.path().to_path_buf(),
            temp.path().join("does-not-exist"),
        ],
        MAX_DEPTH,
    );
    assert_eq!(repos.len(), 1);
}

#[test]
fn test_results_are_sorted() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    make_repo(temp.path(), "zebra");
    make_repo(temp.path(), "alpha");
    make_repo(temp.path(), "mid");

    let repos = find_repos(&[temp.path().to_path_buf()], MAX_DEPTH);
    let mut sorted = repos.clone();
    sorted.sort();
    assert_eq!(repos, sorted);
}

#[test]
fn test_default_roots_include_storage_dir() {
    let mut settings = Settings::default();
    settings.storage.repos_dir = PathBuf::from("/mnt/data/repos");

    let roots = default_search_roots(&settings);
    assert!(roots.contains(&PathBuf::from("/mnt/data/repos")));
}
