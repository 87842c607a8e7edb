//! Git repository discovery and subprocess plumbing.
//!
//! Two different views of git meet here. [`GitRepo`] wraps `git2` for the
//! one structural question gitnum has: where is this repository's metadata
//! directory, so the cache can live next to git's own state. Everything else
//! goes through `std::process::Command`, because the status pipeline
//! consumes git's colored human-readable output and the read path hands
//! control back to git entirely.
//!
//! # Public API
//! - [`GitRepo`]: Repository handle exposing the metadata directory
//! - [`git_command`] / [`status_command`]: Subprocess builders
//! - [`is_subcommand`] / [`alias_subcommands`]: Dispatch vocabulary

use crate::core::error::Result;
use git2::Repository;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// The repository metadata directory: `.git` for regular checkouts,
    /// somewhere deeper for worktrees and submodules.
    pub fn metadata_dir(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }
}

/// Base git invocation, with `-C` forwarded when the user supplied one.
pub fn git_command(directory: Option<&Path>) -> Command {
    let mut cmd = Command::new("git");
    if let Some(dir) = directory {
        cmd.arg("-C");
        cmd.arg(dir);
    }
    cmd
}

/// The status query. Color is forced so the entry markers survive the pipe
/// back to the classifier.
pub fn status_command(directory: Option<&Path>, extra_args: &[String]) -> Command {
    let mut cmd = git_command(directory);
    cmd.args(["-c", "status.color=always", "status"]);
    cmd.args(extra_args);
    cmd
}

// Full list found from running `git help --all`.
const SUBCOMMANDS: &[&str] = &[
    "add", "am", "annotate", "apply", "archive", "bisect", "blame", "branch", "bugreport",
    "bundle", "cat-file", "check-attr", "check-ignore", "check-mailmap", "check-ref-format",
    "checkout", "checkout-index", "cherry", "cherry-pick", "citool", "clean", "clone", "column",
    "commit", "commit-graph", "commit-tree", "config", "count-objects", "credential",
    "credential-cache", "credential-store", "daemon", "describe", "diagnose", "diff",
    "diff-files", "diff-index", "diff-tree", "difftool", "fast-export", "fast-import", "fetch",
    "fetch-pack", "filter-branch", "fmt-merge-msg", "for-each-ref", "for-each-repo",
    "format-patch", "fsck", "gc", "get-tar-commit-id", "gitk", "gitweb", "grep", "gui",
    "hash-object", "help", "hook", "http-backend", "imap-send", "index-pack", "init",
    "instaweb", "interpret-trailers", "log", "ls-files", "ls-remote", "ls-tree", "mailinfo",
    "mailsplit", "maintenance", "merge", "merge-base", "merge-file", "merge-index",
    "merge-one-file", "merge-tree", "mergetool", "mktag", "mktree", "multi-pack-index", "mv",
    "name-rev", "notes", "pack-objects", "pack-redundant", "pack-refs", "patch-id", "prune",
    "prune-packed", "pull", "push", "quiltimport", "range-diff", "read-tree", "rebase",
    "reflog", "remote", "repack", "replace", "request-pull", "rerere", "reset", "restore",
    "rev-list", "rev-parse", "revert", "rm", "scalar", "send-email", "send-pack", "shortlog",
    "show", "show-branch", "show-index", "show-ref", "sparse-checkout", "stash", "status",
    "stripspace", "submodule", "switch", "symbolic-ref", "tag", "unpack-file",
    "unpack-objects", "update-index", "update-ref", "update-server-info", "var",
    "verify-commit", "verify-pack", "verify-tag", "whatchanged", "worktree", "write-tree",
];

/// True iff `arg` is a built-in git subcommand.
pub fn is_subcommand(arg: &str) -> bool {
    SUBCOMMANDS.contains(&arg)
}

/// The user's configured `alias.*` names. Consulted only when a token misses
/// the built-in vocabulary; any failure yields an empty set.
pub fn alias_subcommands(directory: Option<&Path>) -> HashSet<String> {
    let mut cmd = git_command(directory);
    cmd.args(["config", "--name-only", "--get-regexp", "^alias\\."]);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::null());

    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => {
            log::debug!("alias lookup failed to run git: {e}");
            return HashSet::new();
        }
    };

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.trim().strip_prefix("alias."))
        .map(|name| name.to_string())
        .collect()
}
