//! The read path: expand ranges, resolve aliases, hand the invocation to
//! git.
//!
//! Everything up to and including the detected subcommand is preserved as
//! the prefix (with gitnum's own name replaced by `git`); everything after
//! it is range-expanded and alias-resolved. git runs with inherited stdio
//! and its exit code is mirrored, so to the user this is git with numbers.

use crate::core::{
    cache::CacheStore,
    error::{GitnumError, Result},
    git,
    range::expand_ranges,
    resolver::resolve_tokens,
};
use std::path::Path;

/// Resolves the trailing tokens and runs the git subcommand. `store` is
/// absent when no repository was found; git then gets the literal tokens
/// and reports the situation itself.
pub fn execute_passthrough(
    directory: Option<&Path>,
    subcommand: &str,
    trailing: Vec<String>,
    store: Option<&CacheStore>,
) -> Result<i32> {
    let table = match store {
        Some(store) => store.load(),
        None => Default::default(),
    };

    let expanded = expand_ranges(&trailing);
    let resolved = resolve_tokens(&table, expanded);

    let mut cmd = git::git_command(directory);
    cmd.arg(subcommand);
    cmd.args(&resolved);
    log::debug!("running git {subcommand} with args {resolved:?}");

    let status = cmd.status().map_err(GitnumError::git_spawn_failed)?;
    Ok(status.code().unwrap_or(1))
}
