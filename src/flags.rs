//! Normalization flags and the option type tag.
//!
//! The two live in separate types on purpose: flags describe how raw text is
//! massaged before conversion, the kind describes what it converts into.
//! Which flags a kind accepts is centralized in [`OptionKind::allowed_flags`]
//! so registration has exactly one table to consult.

use std::fmt;

bitflags::bitflags! {
    /// Per-option text-normalization flags, supplied at registration time.
    ///
    /// `Flags::empty()` is the explicit "no flags" marker and is valid for
    /// every option type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u8 {
        /// Trim surrounding whitespace from the value. String options only.
        const STRIP = 1;
        /// Upper-case the value. String options only.
        const UPPER = 2;
        /// Lower-case the value. String options only.
        ///
        /// When combined with [`Flags::UPPER`], `LOWER` wins.
        const LOWER = 4;
        /// Discard a leading minus sign during numeric token extraction.
        /// Integer and float options only.
        const UNSIGNED = 8;
    }
}

/// The declared value type of a registered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A string option; any value is accepted.
    Str,
    /// A 64-bit signed integer option.
    Int,
    /// A 64-bit float option.
    Float,
    /// A boolean option, parsed from a fixed literal vocabulary.
    Bool,
}

impl OptionKind {
    /// The set of flags this option type accepts.
    pub fn allowed_flags(self) -> Flags {
        match self {
            OptionKind::Str => Flags::STRIP | Flags::UPPER | Flags::LOWER,
            OptionKind::Int | OptionKind::Float => Flags::UNSIGNED,
            OptionKind::Bool => Flags::empty(),
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            OptionKind::Str => "string",
            OptionKind::Int => "integer",
            OptionKind::Float => "float",
            OptionKind::Bool => "boolean",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
