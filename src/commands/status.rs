//! The write path: run `git status`, number its file lines, persist the
//! alias table.
//!
//! The transform is a single streaming pass over the spawned query's stdout.
//! Every raw line is classified as it arrives: file-bearing lines get the
//! next sequential index, land in the table, and are echoed with that index
//! prefixed; everything else is echoed untouched. git's stderr is inherited,
//! so its own errors reach the terminal without an extra reporting layer.
//!
//! The cache is only ever replaced by a successful, non-empty run. A failed
//! query (non-zero exit) discards the table; an empty result (a clean
//! working tree, say) keeps the previous table alive instead of erasing it.

use crate::core::{
    cache::CacheStore,
    error::{GitnumError, Result},
    git,
    line_parser::{extract_filename, is_file_line},
    output::format_numbered_line,
    state::AliasTable,
};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::Stdio;

/// Runs the status query and returns the exit code to mirror.
pub fn execute_status(
    directory: Option<&Path>,
    extra_args: &[String],
    store: &CacheStore,
) -> Result<i32> {
    let mut cmd = git::status_command(directory, extra_args);
    cmd.stdout(Stdio::piped());
    let mut child = cmd.spawn().map_err(GitnumError::git_spawn_failed)?;

    let mut table = AliasTable::new();
    if let Some(stdout) = child.stdout.take() {
        for line in BufReader::new(stdout).lines() {
            let line = line?;
            println!("{}", annotate_line(&mut table, &line));
        }
    }

    let status = child.wait()?;
    if !status.success() {
        log::debug!("git status failed with {status}; cache left untouched");
        return Ok(status.code().unwrap_or(1));
    }

    if table.is_empty() {
        log::debug!("status produced no entries; keeping previous cache");
        return Ok(0);
    }

    if let Err(e) = store.save(&table) {
        // The numbered output is already on screen and still correct for
        // this run, so a failed save is a warning, not a failure.
        log::warn!("cache save failed: {e}");
    }
    Ok(0)
}

/// Classifies one raw line, appending to the table when it names a file, and
/// returns what should be echoed for it.
fn annotate_line(table: &mut AliasTable, raw_line: &str) -> String {
    if is_file_line(raw_line) {
        let index = table.push(extract_filename(raw_line));
        format_numbered_line(index, raw_line)
    } else {
        raw_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(lines: &[&str]) -> (AliasTable, Vec<String>) {
        let mut table = AliasTable::new();
        let echoed = lines
            .iter()
            .map(|line| annotate_line(&mut table, line))
            .collect();
        (table, echoed)
    }

    #[test]
    fn test_entry_count_matches_file_lines() {
        colored::control::set_override(false);
        let (table, _) = run_lines(&[
            "On branch main",
            "Changes not staged for commit:",
            "  (use \"git add <file>...\" to update what will be committed)",
            "\t\x1b[31mmodified:   alpha.py\x1b[m",
            "\t\x1b[31mdeleted:    beta.py\x1b[m",
            "",
            "Untracked files:",
            "\t\x1b[31mgamma.py\x1b[m",
            "",
            "no changes added to commit (use \"git add\" and/or \"git commit -a\")",
        ]);

        assert_eq!(table.len(), 3);
        let indices: Vec<_> = table.entries().iter().map(|e| e.index()).collect();
        assert_eq!(indices, [1, 2, 3]);
        let filenames: Vec<_> = table.entries().iter().map(|e| e.filename()).collect();
        assert_eq!(filenames, ["alpha.py", "beta.py", "gamma.py"]);
    }

    #[test]
    fn test_file_lines_are_numbered_in_echo_order() {
        colored::control::set_override(false);
        let (_, echoed) = run_lines(&[
            "\t\x1b[32mnew file:   a.rs\x1b[m",
            "\t\x1b[32mnew file:   b.rs\x1b[m",
        ]);
        assert_eq!(echoed[0], "1 \t\x1b[32mnew file:   a.rs\x1b[m");
        assert_eq!(echoed[1], "2 \t\x1b[32mnew file:   b.rs\x1b[m");
    }

    #[test]
    fn test_other_lines_echo_unchanged() {
        let (table, echoed) = run_lines(&["On branch main", ""]);
        assert!(table.is_empty());
        assert_eq!(echoed, ["On branch main", ""]);
    }

    #[test]
    fn test_renamed_entry_stores_new_name() {
        let (table, _) = run_lines(&["\t\x1b[32mrenamed:    old.py -> new.py\x1b[m"]);
        assert_eq!(table.get(1), Some("new.py"));
    }
}
