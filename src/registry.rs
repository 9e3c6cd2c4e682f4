//! The option registry: declared options and their write-back slots.

use camino::Utf8PathBuf;
use indexmap::IndexMap;

use crate::diagnostics::{DiagnosticSink, NullSink, StderrSink};
use crate::error::{ConfigError, RegistryError};
use crate::flags::{Flags, OptionKind};
use crate::loader;
use crate::slot::Slot;

/// A typed handle to the caller's storage for one option.
#[derive(Debug, Clone)]
pub(crate) enum Target {
    Str(Slot<String>),
    Int(Slot<i64>),
    Float(Slot<f64>),
    Bool(Slot<bool>),
}

impl Target {
    fn kind(&self) -> OptionKind {
        match self {
            Target::Str(_) => OptionKind::Str,
            Target::Int(_) => OptionKind::Int,
            Target::Float(_) => OptionKind::Float,
            Target::Bool(_) => OptionKind::Bool,
        }
    }
}

/// One registered option: where its value goes and how raw text is treated.
#[derive(Debug, Clone)]
pub(crate) struct Declaration {
    pub(crate) target: Target,
    pub(crate) flags: Flags,
}

/// Tracks declared options and populates them from a configuration file.
///
/// A registry is an ordinary owned value, so independent registries never
/// collide: a library and the program embedding it can each configure their
/// own without coordinating names. The typical cycle is construct (or
/// [`reset`](Registry::reset)), declare every option with the `add_*`
/// methods, then call [`configure`](Registry::configure) once.
///
/// ```rust
/// use optfile::{Flags, Registry, Slot};
///
/// let retries = Slot::new(4_i64);
/// let greeting = Slot::new("hello".to_string());
///
/// let mut registry = Registry::new();
/// registry.add_int(&retries, "retries", Flags::empty()).unwrap();
/// registry.add_string(&greeting, "greeting", Flags::STRIP).unwrap();
///
/// // No file parsed yet: the slots still hold their defaults.
/// assert_eq!(retries.get(), 4);
/// assert_eq!(greeting.get(), "hello");
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    options: IndexMap<String, Declaration>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all declarations. Idempotent; safe at any time.
    pub fn reset(&mut self) {
        self.options.clear();
    }

    /// Look up the declared type of `name`, or `None` if it is not declared.
    pub fn option_type(&self, name: &str) -> Option<OptionKind> {
        self.options
            .get(&canonical(name))
            .map(|decl| decl.target.kind())
    }

    /// Register a string option.
    ///
    /// Accepts [`Flags::STRIP`], [`Flags::UPPER`], and [`Flags::LOWER`].
    /// Combining `UPPER` and `LOWER` is not rejected; `LOWER` wins. Don't use
    /// the two together.
    pub fn add_string(
        &mut self,
        target: &Slot<String>,
        name: &str,
        flags: Flags,
    ) -> Result<(), RegistryError> {
        self.add(name, Target::Str(target.clone()), flags)
    }

    /// Register an integer option.
    ///
    /// Accepts [`Flags::UNSIGNED`], which discards a leading minus sign
    /// during token extraction.
    pub fn add_int(
        &mut self,
        target: &Slot<i64>,
        name: &str,
        flags: Flags,
    ) -> Result<(), RegistryError> {
        self.add(name, Target::Int(target.clone()), flags)
    }

    /// Register a float option.
    ///
    /// Accepts [`Flags::UNSIGNED`], which discards a leading minus sign
    /// during token extraction.
    pub fn add_float(
        &mut self,
        target: &Slot<f64>,
        name: &str,
        flags: Flags,
    ) -> Result<(), RegistryError> {
        self.add(name, Target::Float(target.clone()), flags)
    }

    /// Register a boolean option. Booleans take no flags; the accepted
    /// spellings are fixed (`1/t/true/y/yes/+` and `0/f/false/n/no/-/nil`,
    /// case-insensitive).
    pub fn add_bool(&mut self, target: &Slot<bool>, name: &str) -> Result<(), RegistryError> {
        self.add(name, Target::Bool(target.clone()), Flags::empty())
    }

    fn add(&mut self, name: &str, target: Target, flags: Flags) -> Result<(), RegistryError> {
        let kind = target.kind();
        let rejected = flags.difference(kind.allowed_flags());
        if !rejected.is_empty() {
            return Err(RegistryError::UnsupportedFlag { kind, rejected });
        }

        let uname = canonical(name);
        if self.options.contains_key(&uname) {
            return Err(RegistryError::DuplicateOption { name: uname });
        }

        self.options.insert(uname, Declaration { target, flags });
        Ok(())
    }

    pub(crate) fn lookup(&self, key: &str) -> Option<&Declaration> {
        self.options.get(&canonical(key))
    }

    /// Read the first existing candidate file and populate declared options.
    ///
    /// Candidates are tried in order; only the first one that exists is read
    /// (no merging). With `verbose` set, malformed lines, unknown keys, and
    /// unconvertible values are announced on stderr; otherwise they are
    /// silently skipped. Either way they never fail the call — only file
    /// discovery and file access do.
    ///
    /// ```rust,no_run
    /// use optfile::{Flags, Registry, Slot};
    ///
    /// let port = Slot::new(8080_i64);
    /// let mut registry = Registry::new();
    /// registry.add_int(&port, "port", Flags::empty()).unwrap();
    /// registry
    ///     .configure(["app.conf", "/etc/app.conf"], true)
    ///     .expect("no configuration file found");
    /// println!("listening on {}", port.get());
    /// ```
    pub fn configure<I, P>(&self, candidates: I, verbose: bool) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        if verbose {
            self.configure_with(candidates, &mut StderrSink)
        } else {
            self.configure_with(candidates, &mut NullSink)
        }
    }

    /// Like [`configure`](Registry::configure), but reports per-line problems
    /// to the given sink instead of choosing between stderr and silence.
    pub fn configure_with<I, P>(
        &self,
        candidates: I,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        let candidates: Vec<Utf8PathBuf> = candidates.into_iter().map(Into::into).collect();
        loader::run(self, &candidates, sink)
    }
}

/// An option's registry key: its name upper-cased.
pub(crate) fn canonical(name: &str) -> String {
    name.to_uppercase()
}
