//! Typed loading of `OPTION=value` configuration files.
//!
//! The model is deliberately small: the caller owns a [`Slot`] per setting,
//! holding its default value, and declares each setting in a [`Registry`]
//! under a case-insensitive name with a type and optional normalization
//! [`Flags`]. A single [`Registry::configure`] call then picks the first
//! existing file from a list of candidate paths, scans it line by line, and
//! writes each successfully converted value through the matching slot.
//!
//! Lines that are comments (`# ...`) or blank are skipped. Lines that are
//! malformed, name an unknown option, or carry an unconvertible value are
//! also skipped, reported as diagnostics rather than errors: one bad line
//! never prevents the rest of the file from loading. Only two things fail a
//! `configure` call outright, no candidate file existing and the selected
//! file being unreadable.
//!
//! # Example
//!
//! ```rust
//! use optfile::{Flags, Registry, Slot};
//!
//! let dir = std::env::temp_dir();
//! let path = dir.join("optfile-doc-example.conf");
//! std::fs::write(&path, "# demo\nport=9000\nlogin=  Admin  \n")?;
//!
//! let port = Slot::new(8080_i64);
//! let login = Slot::new(String::new());
//!
//! let mut registry = Registry::new();
//! registry.add_int(&port, "port", Flags::empty())?;
//! registry.add_string(&login, "login", Flags::STRIP | Flags::LOWER)?;
//! registry.configure([path.to_str().unwrap()], false)?;
//!
//! assert_eq!(port.get(), 9000);
//! assert_eq!(login.get(), "admin");
//! # std::fs::remove_file(&path).ok();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! For programmatic access to the skipped-line reports, pass a
//! `Vec<Diagnostic>` (or any [`DiagnosticSink`]) to
//! [`Registry::configure_with`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod coerce;
mod diagnostics;
mod error;
mod flags;
mod loader;
mod registry;
mod scan;
mod slot;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, NullSink, StderrSink};
pub use error::{ConfigError, RegistryError};
pub use flags::{Flags, OptionKind};
pub use registry::Registry;
pub use slot::Slot;
