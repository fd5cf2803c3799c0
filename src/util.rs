// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scraping helpers: timestamps, substring extraction, HTML stripping,
//! unicode escapes. Companions to the HTTP layer for callers that poke at
//! response text by hand.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

/// Current unix timestamp in seconds, as a 10-digit string
pub fn timestamp_secs() -> String {
    Utc::now().timestamp().to_string()
}

/// Current unix timestamp in milliseconds, as a 13-digit string
pub fn timestamp_millis() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Parse a 10-digit (seconds) or 13-digit (milliseconds) unix timestamp
pub fn datetime_from_timestamp(timestamp: &str) -> Result<DateTime<Utc>> {
    let parse = |ts: &str| {
        ts.parse::<i64>()
            .map_err(|e| Error::other(format!("invalid timestamp '{}': {}", ts, e)))
    };
    match timestamp.len() {
        10 => DateTime::from_timestamp(parse(timestamp)?, 0),
        13 => DateTime::from_timestamp_millis(parse(timestamp)?),
        _ => {
            return Err(Error::other(format!(
                "timestamp must be 10 or 13 digits, got {}",
                timestamp.len()
            )))
        }
    }
    .ok_or_else(|| Error::other(format!("timestamp '{}' out of range", timestamp)))
}

lazy_static! {
    static ref SCRIPT_STYLE: Regex =
        Regex::new(r"(?is)<script.*?</script\s*>|<style.*?</style\s*>").unwrap();
    static ref HTML_TAG: Regex = Regex::new(r"(?s)<.*?>").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"(?m)^[ \t]+$[\r\n]*").unwrap();
}

/// Strip HTML markup and extract readable text.
///
/// Removes script/style blocks, all tags, whitespace-only lines and
/// `&nbsp;` entities. Not a parser; good enough for scraping text out of
/// response bodies.
pub fn html_to_text(html: &str) -> String {
    let text = SCRIPT_STYLE.replace_all(html, "");
    let text = HTML_TAG.replace_all(&text, "");
    let text = BLANK_LINES.replace_all(&text, "");
    text.replace("&nbsp;", "")
}

/// Text before the first occurrence of `delim`, empty when absent
pub fn left_of(text: &str, delim: &str) -> String {
    text.find(delim)
        .map(|i| text[..i].to_string())
        .unwrap_or_default()
}

/// Text between the first `start` and the following `end`, empty when
/// either is absent
pub fn between(text: &str, start: &str, end: &str) -> String {
    let Some(from) = text.find(start).map(|i| i + start.len()) else {
        return String::new();
    };
    let Some(len) = text[from..].find(end) else {
        return String::new();
    };
    text[from..from + len].to_string()
}

/// Text after the last occurrence of `delim`, empty when absent
pub fn right_of(text: &str, delim: &str) -> String {
    text.rfind(delim)
        .map(|i| text[i + delim.len()..].to_string())
        .unwrap_or_default()
}

/// Escape non-ASCII characters as `\uXXXX` sequences (UTF-16 code units,
/// so astral characters become surrogate pairs)
pub fn escape_unicode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u16; 2];
    for c in text.chars() {
        if (c as u32) > 127 {
            for unit in c.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Decode `\uXXXX` sequences back to characters. Adjacent escapes are
/// decoded together so surrogate pairs survive; anything that is not a
/// well-formed escape passes through unchanged.
pub fn unescape_unicode(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut units: Vec<u16> = Vec::new();
    let mut i = 0;

    let mut flush = |units: &mut Vec<u16>, out: &mut String| {
        if !units.is_empty() {
            out.push_str(&String::from_utf16_lossy(units));
            units.clear();
        }
    };

    while i < chars.len() {
        if chars[i] == '\\'
            && i + 5 < chars.len()
            && chars[i + 1] == 'u'
            && chars[i + 2..i + 6].iter().all(|c| c.is_ascii_hexdigit())
        {
            let hex: String = chars[i + 2..i + 6].iter().collect();
            // Checked hex digits above, 4 of them always fit a u16.
            units.push(u16::from_str_radix(&hex, 16).unwrap());
            i += 6;
            continue;
        }
        flush(&mut units, &mut out);
        out.push(chars[i]);
        i += 1;
    }
    flush(&mut units, &mut out);
    out
}
