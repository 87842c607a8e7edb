//! Mapping of numeric alias tokens back to filenames.
//!
//! The central promise: a numeric token is an alias only when it indexes a
//! real entry in the table; otherwise it is literal user input and must
//! never be dropped or altered. Out-of-range numbers may simply be numeric
//! filenames or numbers the user meant to pass to git.

use crate::core::state::AliasTable;

/// Resolves each token against the table, leaving non-aliases untouched.
pub fn resolve_tokens(table: &AliasTable, tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|token| resolve_token(table, token))
        .collect()
}

fn resolve_token(table: &AliasTable, token: String) -> String {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return token;
    }
    match token.parse::<usize>() {
        Ok(index) => match table.get(index) {
            Some(filename) => filename.to_string(),
            None => token,
        },
        // All-digit but too large for usize: not an index of anything.
        Err(_) => token,
    }
}
