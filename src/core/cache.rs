//! Persistence of the alias table between invocations.
//!
//! Each invocation is a fresh process; the only state that survives is one
//! JSON file inside the repository's metadata directory, overwritten
//! wholesale on every save. There is no locking: the file is read or written
//! by at most one interactive process at a time, and concurrent invocations
//! racing on it are an accepted hazard.
//!
//! The store is an explicit object handed into the write and read paths
//! rather than module-level state, so tests can point it at a temp
//! directory. [`CacheStore::load`] is silent on every failure (the read
//! path treats a missing or broken cache as "no aliases known"), but
//! [`CacheStore::load_outcome`] keeps the failure modes distinguishable.
//!
//! # Public API
//! - [`CacheStore`]: `save`/`load` for one repository's alias table
//! - [`LoadOutcome`]: Typed result of a load attempt

use crate::core::error::{GitnumError, Result};
use crate::core::state::AliasTable;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CACHE_FILENAME: &str = "gitnum.json";

pub struct CacheStore {
    path: PathBuf,
}

/// What a load attempt actually found. User-facing behavior collapses all
/// non-loaded variants to an empty table.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(AliasTable),
    Missing,
    Unreadable(io::Error),
    Corrupt(serde_json::Error),
}

impl CacheStore {
    /// Creates a store rooted at the repository metadata directory (the
    /// `.git` dir for regular checkouts, deeper for worktrees).
    pub fn new(metadata_dir: impl Into<PathBuf>) -> Self {
        CacheStore {
            path: metadata_dir.into().join(CACHE_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the cache file with the serialized table. No append, no
    /// merge: the previous table is gone after this returns.
    pub fn save(&self, table: &AliasTable) -> Result<()> {
        let json = serde_json::to_string(table)?;
        fs::write(&self.path, json)
            .map_err(|e| GitnumError::cache_write_failed(&self.path, e))?;
        log::debug!("cached {} entries to {}", table.len(), self.path.display());
        Ok(())
    }

    /// Loads the table, collapsing every failure to an empty one.
    pub fn load(&self) -> AliasTable {
        match self.load_outcome() {
            LoadOutcome::Loaded(table) => table,
            LoadOutcome::Missing => {
                log::debug!("no cache at {}; aliases unavailable", self.path.display());
                AliasTable::new()
            }
            LoadOutcome::Unreadable(e) => {
                log::warn!("cache at {} unreadable: {e}", self.path.display());
                AliasTable::new()
            }
            LoadOutcome::Corrupt(e) => {
                log::warn!("cache at {} corrupt: {e}", self.path.display());
                AliasTable::new()
            }
        }
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return LoadOutcome::Missing,
            Err(e) => return LoadOutcome::Unreadable(e),
        };
        match serde_json::from_str(&content) {
            Ok(table) => LoadOutcome::Loaded(table),
            Err(e) => LoadOutcome::Corrupt(e),
        }
    }
}
