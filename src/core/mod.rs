//! Core functionality for gitnum.
//!
//! This module provides the building blocks of the alias pipeline: status
//! line parsing, the alias table and its cache, range expansion, alias
//! resolution, and the git plumbing underneath all of it.

pub mod cache;
pub mod error;
pub mod git;
pub mod line_parser;
pub mod output;
pub mod range;
pub mod resolver;
pub mod state;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitnumError, Result};

// === Status line parsing ===
// Raw-line classification and filename extraction
pub use line_parser::{extract_filename, is_file_line, sanitize};

// === Alias table ===
// The (index, filename) entries produced by one status run
pub use state::{AliasTable, Entry};

// === Cache persistence ===
// Per-repository store with a typed load outcome
pub use cache::{CacheStore, LoadOutcome, CACHE_FILENAME};

// === Token handling ===
// Range expansion and alias resolution for the read path
pub use range::expand_ranges;
pub use resolver::resolve_tokens;

// === Git operations ===
// Repository discovery and subprocess builders
pub use git::{alias_subcommands, git_command, is_subcommand, status_command, GitRepo};

// === Output formatting ===
pub use output::{format_numbered_line, print_error};
