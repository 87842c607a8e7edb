//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! various states for end-to-end scenarios, plus helpers for inspecting the
//! alias cache gitnum leaves behind.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use gitnum::core::error::{GitnumError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the alias cache this repository's status runs produce.
    pub fn cache_path(&self) -> PathBuf {
        self.path.join(".git").join("gitnum.json")
    }
}

/// Sets up a fresh git repository with basic configuration so commands run
/// without user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(GitnumError::Io)?;
    let repo_path = temp_dir.path().to_path_buf();

    run_git(&repo_path, &["init"])?;
    run_git(&repo_path, &["config", "user.name", "Test User"])?;
    run_git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt".
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content).map_err(GitnumError::Io)?;
    Ok(())
}

pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename)).map_err(GitnumError::Io)?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    run_git(repo_path, &["add", filename])
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    run_git(repo_path, &["commit", "-m", message])
}

pub fn git_mv(repo_path: &Path, from: &str, to: &str) -> Result<()> {
    run_git(repo_path, &["mv", from, to])
}

/// `git status --porcelain` output, for asserting what actually got staged.
pub fn porcelain_status(repo_path: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["status", "--porcelain"])
        .current_dir(repo_path)
        .output()
        .map_err(GitnumError::Io)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// A gitnum invocation rooted in the test repository. The locale is pinned
/// so git's English action labels stay stable.
pub fn gitnum_cmd(repo: &TestRepo) -> Command {
    let mut cmd = Command::cargo_bin("gitnum").expect("gitnum binary builds");
    cmd.current_dir(&repo.path);
    cmd.env("LC_ALL", "C");
    cmd
}

/// Runs `gitnum status` once to populate the alias cache.
pub fn run_status_to_cache(repo: &TestRepo) {
    gitnum_cmd(repo).arg("status").assert().success();
}

/// The cache parsed into its wire shape, or None when no cache exists.
pub fn read_cache_entries(repo: &TestRepo) -> Option<Vec<(usize, String)>> {
    let content = fs::read_to_string(repo.cache_path()).ok()?;
    serde_json::from_str(&content).ok()
}

/// The cache file's raw bytes, or None when no cache exists.
pub fn read_cache_raw(repo: &TestRepo) -> Option<String> {
    fs::read_to_string(repo.cache_path()).ok()
}

fn run_git(repo_path: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(GitnumError::Io)?;
    Ok(())
}
