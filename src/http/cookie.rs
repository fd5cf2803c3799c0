// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! String-level cookie merging
//!
//! Merges server `Set-Cookie` response headers with a caller-supplied cookie
//! string into a single flattened `name=value; name=value` string for the
//! next request. No domain/path/expiry scoping - attributes are discarded,
//! every pair applies to whatever the caller sends it to.

/// Result of parsing a flattened cookie string.
///
/// Malformed tokens are never an error; they are collected in `skipped`
/// so callers and tests can observe exactly what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieParse {
    /// Successfully parsed `(name, value)` pairs, in input order.
    pub pairs: Vec<(String, String)>,
    /// Tokens that could not be split on `=` (trimmed, empty tokens omitted).
    pub skipped: Vec<String>,
}

/// Parse a `name1=v1; name2=v2` cookie string.
///
/// Names and values are trimmed. A token without `=` is recorded in
/// [`CookieParse::skipped`] rather than producing an error.
pub fn parse_cookie_string(cookies: &str) -> CookieParse {
    let mut parse = CookieParse::default();
    for token in cookies.split(';') {
        match token.split_once('=') {
            Some((name, value)) => {
                parse
                    .pairs
                    .push((name.trim().to_string(), value.trim().to_string()));
            }
            None => {
                let token = token.trim();
                if !token.is_empty() {
                    parse.skipped.push(token.to_string());
                }
            }
        }
    }
    parse
}

/// Ordered-overwrite pair list. Iteration order is first-insertion order,
/// upsert replaces the value in place.
#[derive(Debug, Default)]
struct CookiePairs(Vec<(String, String)>);

impl CookiePairs {
    fn upsert(&mut self, name: String, value: String) {
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }
}

/// Deletion sentinel: servers commonly expire a cookie by setting its value
/// to the literal `deleted`. Exactly this literal, compared ASCII
/// case-insensitively - empty values are kept as-is.
fn is_deleted(value: &str) -> bool {
    value.eq_ignore_ascii_case("deleted")
}

/// Merge `Set-Cookie` response header values with a prior cookie string.
///
/// Pure and reentrant; never fails. Malformed entries degrade to omission.
///
/// - No response cookies: returns `prior` unchanged when `auto_cookies`,
///   otherwise the empty string (the caller did not opt into accumulation).
/// - Otherwise the prior pairs (only when `auto_cookies`) seed an ordered
///   map, and each response entry's leading `name=value` pair (attributes
///   after the first `;` discarded) overwrites by name, last response entry
///   winning.
/// - A response entry with no `;` at all is skipped, as is any pair that
///   cannot be split on `=`.
/// - Pairs whose value is the `deleted` sentinel are dropped from the output.
///
/// Output is `name=value; name=value` in first-insertion order with no
/// trailing separator.
pub fn merge(set_cookies: &[&str], prior: &str, auto_cookies: bool) -> String {
    if set_cookies.is_empty() {
        return if auto_cookies {
            prior.to_string()
        } else {
            String::new()
        };
    }

    let mut merged = CookiePairs::default();

    if auto_cookies && !prior.is_empty() {
        for (name, value) in parse_cookie_string(prior).pairs {
            merged.upsert(name, value);
        }
    }

    for entry in set_cookies {
        // Attributes (Path, Domain, Expires, ...) start at the first ';'.
        // An entry without any ';' carries no attributes and is skipped.
        let Some((pair, _)) = entry.split_once(';') else {
            continue;
        };
        if let Some((name, value)) = pair.split_once('=') {
            merged.upsert(name.trim().to_string(), value.trim().to_string());
        }
    }

    let kept: Vec<String> = merged
        .0
        .into_iter()
        .filter(|(_, value)| !is_deleted(value))
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();

    kept.join("; ")
}

/// Look up one cookie's value in a flattened cookie string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    parse_cookie_string(cookies)
        .pairs
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v)
}
