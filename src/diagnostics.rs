//! Non-fatal diagnostics emitted while scanning a configuration file.
//!
//! The loader deliberately favors "load what you can" over failing the whole
//! file on one bad line, so per-line problems are not errors: they are
//! reported through a caller-supplied [`DiagnosticSink`] and the offending
//! assignment is skipped.

use std::fmt;

/// What went wrong on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line is neither a comment, blank, nor a `key=value` entry.
    MalformedLine,
    /// The key does not match any registered option.
    UnrecognizedOption,
    /// The value could not be converted to the option's declared type.
    CoercionFailure,
}

/// A single non-fatal problem found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The problem class.
    pub kind: DiagnosticKind,
    /// 1-based line number in the configuration file.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Receives diagnostics during a scan.
///
/// `Registry::configure` wires this to stderr (verbose) or discards
/// everything (quiet); `Registry::configure_with` accepts any sink, letting
/// callers capture, log, or filter per policy.
pub trait DiagnosticSink {
    /// Called once per problem line, in file order.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Writes each diagnostic to stderr. The verbose-mode default.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Discards every diagnostic. The quiet-mode default.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Collects diagnostics for later inspection.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
