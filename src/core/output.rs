//! Output formatting for the terminal.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// A status line annotated with its alias index. The line itself is echoed
/// exactly as git printed it, colors included.
pub fn format_numbered_line(index: usize, raw_line: &str) -> String {
    format!("{} {}", index.to_string().cyan(), raw_line)
}
