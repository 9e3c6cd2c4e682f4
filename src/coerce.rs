//! Conversion of raw entry values into typed results.
//!
//! Numeric conversion happens in two stages: a coarse token extraction that
//! isolates the first numeric-looking substring of the value, then the
//! standard library parser on that token. Extraction is a pre-filter, not
//! validation — a token like `1.2.3` is extracted and then rejected by the
//! parser. Booleans skip extraction entirely and match a fixed vocabulary.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::flags::Flags;
use crate::registry::Target;

static INT_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?[0-9]+").unwrap());
static UINT_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());
static FLOAT_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?[0-9.]+").unwrap());
static UFLOAT_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9.]+").unwrap());

/// Accepted spellings of `true`, compared case-insensitively after trimming.
const BOOLEAN_TRUES: [&str; 6] = ["1", "t", "true", "y", "yes", "+"];
/// Accepted spellings of `false`.
const BOOLEAN_FALSES: [&str; 7] = ["0", "f", "false", "n", "no", "-", "nil"];

/// A per-value conversion failure. Never fatal to the scan; the loader turns
/// it into a [`crate::diagnostics::Diagnostic`] and keeps going.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CoerceError {
    what: &'static str,
    token: String,
}

impl CoerceError {
    fn new(what: &'static str, token: impl Into<String>) -> Self {
        Self {
            what,
            token: token.into(),
        }
    }
}

impl fmt::Display for CoerceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" not a recognizable {}", self.token, self.what)
    }
}

/// Convert `raw` according to the declared type and flags, writing the result
/// through the target slot on success. On failure the slot keeps its previous
/// value.
pub(crate) fn apply(target: &Target, flags: Flags, raw: &str) -> Result<(), CoerceError> {
    match target {
        Target::Str(slot) => {
            slot.set(fold_string(raw, flags));
            Ok(())
        }
        Target::Int(slot) => {
            let unsigned = flags.contains(Flags::UNSIGNED);
            let value = parse_int(raw, unsigned)?;
            slot.set(value);
            Ok(())
        }
        Target::Float(slot) => {
            let unsigned = flags.contains(Flags::UNSIGNED);
            let value = parse_float(raw, unsigned)?;
            slot.set(value);
            Ok(())
        }
        Target::Bool(slot) => {
            let value = parse_bool(raw)?;
            slot.set(value);
            Ok(())
        }
    }
}

/// Apply string flags: STRIP first, then LOWER if set else UPPER.
fn fold_string(raw: &str, flags: Flags) -> String {
    let value = if flags.contains(Flags::STRIP) {
        raw.trim()
    } else {
        raw
    };
    if flags.contains(Flags::LOWER) {
        value.to_lowercase()
    } else if flags.contains(Flags::UPPER) {
        value.to_uppercase()
    } else {
        value.to_string()
    }
}

fn parse_int(raw: &str, unsigned: bool) -> Result<i64, CoerceError> {
    let pattern = if unsigned { &UINT_TOKEN } else { &INT_TOKEN };
    let token = pattern.find(raw).map(|m| m.as_str()).unwrap_or_default();
    token
        .parse()
        .map_err(|_| CoerceError::new("integer", token))
}

fn parse_float(raw: &str, unsigned: bool) -> Result<f64, CoerceError> {
    let pattern = if unsigned { &UFLOAT_TOKEN } else { &FLOAT_TOKEN };
    let token = pattern.find(raw).map(|m| m.as_str()).unwrap_or_default();
    token.parse().map_err(|_| CoerceError::new("float", token))
}

fn parse_bool(raw: &str) -> Result<bool, CoerceError> {
    let token = raw.trim().to_lowercase();
    if BOOLEAN_TRUES.contains(&token.as_str()) {
        return Ok(true);
    }
    if BOOLEAN_FALSES.contains(&token.as_str()) {
        return Ok(false);
    }
    Err(CoerceError::new("boolean", token))
}
