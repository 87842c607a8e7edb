//! Classification and filename extraction for raw `git status` lines.
//!
//! `git status` is asked for colored output even when stdout is a pipe, and
//! the color codes double as structure: git paints additions green and
//! deletions red, and only lines that name a file carry one of those two
//! markers. Header lines, hints, and blank lines never do. [`is_file_line`]
//! therefore runs on the *raw* line, before any sanitizing.
//!
//! This is a documented coupling to git's display format, kept behind this
//! module's interface so a structured status source could replace it without
//! touching the rest of the pipeline.
//!
//! # Public API
//! - [`sanitize`]: Strip color codes and noise suffixes, trim
//! - [`is_file_line`]: Decide whether a raw line names a file
//! - [`extract_filename`]: Reduce a file-bearing line to the bare path

/// The color codes git emits in status output. Anything outside this set is
/// left untouched.
const ANSI_CODES: [&str; 8] = [
    "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m", "\x1b[37m", "\x1b[m",
];

/// The two markers that only appear on file-bearing lines: red for
/// deletions and unstaged entries, green for staged entries.
const ENTRY_MARKERS: [&str; 2] = ["\x1b[31m", "\x1b[32m"];

/// Parenthetical annotations git appends to submodule lines.
const NOISE_SUFFIXES: [&str; 3] = ["(new commits)", "(modified content)", "(untracked content)"];

/// Action labels git prefixes file entries with. Untracked entries carry no
/// label at all.
const ACTION_PREFIXES: [&str; 4] = ["deleted:", "new file:", "modified:", "renamed:"];

const RENAME_SEPARATOR: &str = "->";

/// Removes every known color code and noise suffix from a raw line and trims
/// surrounding whitespace. Total: unrecognized escape sequences pass through.
pub fn sanitize(raw: &str) -> String {
    let mut line = remove_ansi(raw);
    for suffix in NOISE_SUFFIXES {
        if let Some(stripped) = line.trim_end().strip_suffix(suffix) {
            line = stripped.to_string();
        }
    }
    line.trim().to_string()
}

/// True iff the raw (pre-sanitization) line carries an entry color marker.
pub fn is_file_line(raw: &str) -> bool {
    ENTRY_MARKERS.iter().any(|marker| raw.contains(marker))
}

/// Reduces a file-bearing line to the bare path: sanitize, cut everything
/// through the action label, and for renames keep only the new name after
/// the `->` separator. Idempotent on already-clean input.
pub fn extract_filename(raw: &str) -> String {
    let line = sanitize(raw);
    for prefix in ACTION_PREFIXES {
        if let Some(at) = line.find(prefix) {
            let mut rest = &line[at + prefix.len()..];
            if prefix == "renamed:" {
                if let Some(sep) = rest.find(RENAME_SEPARATOR) {
                    rest = &rest[sep + RENAME_SEPARATOR.len()..];
                }
            }
            return rest.trim().to_string();
        }
    }
    line
}

fn remove_ansi(raw: &str) -> String {
    let mut line = raw.to_string();
    for code in ANSI_CODES {
        line = line.replace(code, "");
    }
    line
}
