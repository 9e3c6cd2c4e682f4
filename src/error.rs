//! Hard errors: registration failures and configure-time file failures.
//!
//! Per-line problems (malformed lines, unknown keys, bad values) are not
//! errors; they flow through [`crate::diagnostics`] instead.

use std::fmt;

use camino::Utf8PathBuf;

use crate::flags::{Flags, OptionKind};

/// An error returned by the `Registry::add_*` registration methods.
///
/// Registration errors are caller errors: the registry is left exactly as it
/// was before the failing call.
#[derive(Debug)]
#[non_exhaustive]
pub enum RegistryError {
    /// The canonical (upper-cased) name is already declared, under any type.
    DuplicateOption {
        /// The canonical name that collided.
        name: String,
    },

    /// A flag outside the option type's allowed set was supplied.
    UnsupportedFlag {
        /// The option type being registered.
        kind: OptionKind,
        /// The offending flag bits (only the disallowed ones).
        rejected: Flags,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateOption { name } => {
                write!(f, "option \"{name}\" already exists")
            }
            RegistryError::UnsupportedFlag { kind, rejected } => {
                write!(f, "unsupported flags {rejected:?} for {kind} option type")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// An error returned by `Registry::configure`.
///
/// Only file discovery and file access fail the call; everything found inside
/// the file is handled line-by-line and never aborts the scan.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// None of the candidate paths exist.
    NoFileFound {
        /// The candidate paths, in the order they were tried.
        tried: Vec<Utf8PathBuf>,
    },

    /// The selected file exists but could not be opened or read.
    FileOpen {
        /// The path of the selected candidate.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoFileFound { tried } => {
                write!(f, "no configuration file found (tried ")?;
                for (i, path) in tried.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{path}\"")?;
                }
                write!(f, ")")
            }
            ConfigError::FileOpen { path, .. } => {
                write!(f, "error opening \"{path}\"")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NoFileFound { .. } => None,
            ConfigError::FileOpen { source, .. } => Some(source),
        }
    }
}
