//! Per-line classification of configuration file text.

use std::sync::LazyLock;

use regex::Regex;

// A comment wins even when the rest of the line would match an entry.
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*#").unwrap());

// Key is the longest run free of ':' and '='; value is the raw remainder and
// may itself contain '='. Trailing whitespace stays part of the key.
static ENTRY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*([^:=]+)=(.*)$").unwrap());

/// The classification of one physical line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `# ...`, possibly indented. Skipped.
    Comment,
    /// Nothing but whitespace. Skipped.
    Blank,
    /// A `key=value` entry; `value` is unprocessed.
    Entry { key: &'a str, value: &'a str },
    /// Anything else. Skipped with a diagnostic.
    Malformed,
}

pub(crate) fn classify(line: &str) -> Line<'_> {
    if COMMENT.is_match(line) {
        return Line::Comment;
    }
    if line.trim().is_empty() {
        return Line::Blank;
    }
    match ENTRY.captures(line) {
        Some(caps) => {
            let key = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let value = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            Line::Entry { key, value }
        }
        None => Line::Malformed,
    }
}
