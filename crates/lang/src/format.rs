//! Line-oriented language file codec.
//!
//! One entry per line:
//!
//! ```text
//! some.key.path : "Template text with {0} and %placeholder%"
//! another.key : "Another value"
//! ```
//!
//! Keys are dot-separated word segments without a trailing dot. The value is
//! everything between the first quote after the separator and the last quote
//! on the line, so values may contain `:` and `"`. Blank lines and lines that
//! do not start with a key (comments, headers) are skipped. A line that starts
//! with a key but has no separator is rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::LangError;

/// Separates keys from quoted values.
pub const SEPARATOR: char = ':';

const KEY_PATTERN: &str = r"(?:[0-9A-Za-z_]+\.+[^.])*[0-9A-Za-z_]+";

static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r#"^({KEY_PATTERN})\s*{SEPARATOR}\s*"(.*)"$"#))
        .expect("valid lang entry pattern")
});

static KEY_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{KEY_PATTERN}")).expect("valid lang key pattern"));

/// A parsed `key : "value"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangEntry {
    /// Dot-separated key.
    pub key: String,
    /// Unquoted value.
    pub value: String,
    /// 1-based line the entry came from.
    pub line: usize,
}

/// Parse every entry in `source`.
///
/// Parsing stops at the first malformed line; no entries are returned in that
/// case, so callers can apply the result all-or-nothing.
pub fn parse_entries(source: &str) -> Result<Vec<LangEntry>, LangError> {
    let mut entries = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = ENTRY.captures(line) {
            entries.push(LangEntry {
                key: caps[1].to_string(),
                value: caps[2].to_string(),
                line: line_number,
            });
            continue;
        }

        if !line.contains(SEPARATOR) && KEY_PREFIX.is_match(line) {
            return Err(LangError::Malformed {
                line: line_number,
                reason: format!("missing separator character \"{SEPARATOR}\""),
            });
        }
    }

    Ok(entries)
}

/// Render `entries` as language file text, one `key: "value"` line each.
pub fn write_entries(entries: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(key);
        out.push(SEPARATOR);
        out.push_str(" \"");
        out.push_str(value);
        out.push_str("\"\n");
    }
    out
}
