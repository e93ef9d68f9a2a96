//! Cross-strategy configuration aliases.
//!
//! An alias is a named token letting unrelated strategies share one
//! caller-supplied value under their own locally-named option. A single
//! `RELATIVE_TOLERANCE` value, for example, can configure every numeric
//! comparator in a strategy list, whatever each one calls its option.

use std::fmt;

/// Opaque named token identifying a shared configuration concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alias(&'static str);

impl Alias {
    /// A new alias token with the given semantic name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The alias's semantic name.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Relative tolerance shared by numeric comparators.
pub const RELATIVE_TOLERANCE: Alias = Alias::new("relative_tolerance");

/// Absolute tolerance shared by numeric comparators.
pub const ABSOLUTE_TOLERANCE: Alias = Alias::new("absolute_tolerance");
