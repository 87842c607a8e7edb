//! Gitnum - number your git status output and reuse the numbers as file
//! aliases.
//!
//! Running `gitnum status` prefixes every file-bearing line of `git status`
//! with a sequential index and remembers the (index, filename) pairs in a
//! per-repository cache. Any later `gitnum <subcommand> ...` invocation
//! resolves numeric arguments and `N-M` ranges against that cache and runs
//! plain git with the filenames substituted in: `gitnum add 1 3-5`.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Status line parsing (sanitizer, classifier, filename extractor)
//! - The alias table and its per-repository cache store
//! - Range expansion and alias resolution
//! - Git repository discovery and subprocess builders
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    expand_ranges,
    extract_filename,
    format_numbered_line,
    is_file_line,
    print_error,
    resolve_tokens,
    sanitize,

    AliasTable,

    CacheStore,
    Entry,

    GitRepo,
    // Error handling
    GitnumError,

    LoadOutcome,
    Result,
};
