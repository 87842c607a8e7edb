//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitnumError`] which covers every failure gitnum can
//! produce on its own. Failures of the underlying git invocation are not
//! represented here: git prints those on its own stderr and gitnum mirrors
//! the exit code instead of wrapping the message.
//!
//! # Public API
//! - [`GitnumError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitnumError>`

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for gitnum
#[derive(Error, Debug)]
pub enum GitnumError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    // Subprocess errors
    #[error("Failed to spawn git: {source}")]
    GitSpawnFailed { source: std::io::Error },

    // File operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Cache errors
    #[error("Failed to serialize cache data: {0}")]
    CacheSerializationFailed(#[from] serde_json::Error),

    #[error("Failed to write cache file '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using GitnumError
pub type Result<T> = std::result::Result<T, GitnumError>;

impl GitnumError {
    /// Create a git spawn failure error
    pub fn git_spawn_failed(source: std::io::Error) -> Self {
        Self::GitSpawnFailed { source }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }
}
