//! Expansion of `N-M` range tokens into individual indices.
//!
//! Only the exact shape digits-dash-digits is a range; anything else
//! (flags, filenames with dashes, `1-2-3`) passes through untouched, in
//! its original position. A reversed range (`7-4`) expands to
//! nothing rather than erroring.

/// Expands every range token in place, preserving overall order.
pub fn expand_ranges(tokens: &[String]) -> Vec<String> {
    let mut result = Vec::with_capacity(tokens.len());
    for token in tokens {
        match parse_range(token) {
            Some((lo, hi)) => result.extend((lo..=hi).map(|n| n.to_string())),
            None => result.push(token.clone()),
        }
    }
    result
}

/// Parses a token of the form `lo-hi`: digits, one literal dash, digits.
fn parse_range(token: &str) -> Option<(usize, usize)> {
    let (lo, hi) = token.split_once('-')?;
    if lo.is_empty() || hi.is_empty() || hi.contains('-') {
        return None;
    }
    if !lo.bytes().all(|b| b.is_ascii_digit()) || !hi.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((lo.parse().ok()?, hi.parse().ok()?))
}
