//! deepcmp - deep structural equivalence checking for test assertions
//!
//! Compares two arbitrarily nested values and produces a precise list of
//! mismatches rather than a single boolean. Composite values are decomposed
//! by pluggable unpack strategies; leaves are judged by pluggable equal
//! strategies; per-strategy options resolve from one flat configuration,
//! with cross-cutting aliases such as [`RELATIVE_TOLERANCE`] feeding every
//! strategy that understands them.
//!
//! The top-level `compare` / `is_equal` / `assert_equal` functions use the
//! built-in strategy lists; the [`api`] module takes explicit strategy lists
//! for callers plugging in their own.
//!
//! ```
//! use deepcmp::{AliasValues, Config};
//! use serde_json::json;
//!
//! let errors = deepcmp::compare(
//!     json!({"a": 1, "b": 2}),
//!     json!({"a": 1, "b": 3}),
//!     &AliasValues::new(),
//!     &Config::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].index.to_string(), "(\"b\",)");
//! ```

pub mod builtin;
pub mod default;

// The comparison core, for callers supplying their own strategy lists.
pub use deepcmp_core::api;

// Re-export the core surface
pub use deepcmp_core::{
    Alias, AliasValues, BindError, BoundOptions, Cause, CauseKind, Comparator, CompareError,
    Config, EqualOutcome, EquivalenceError, Index, NotEquivalent, OptionSpec, Pair, Segment,
    StrategySchema, UnpackOutcome, Unpacker, ABSOLUTE_TOLERANCE, RELATIVE_TOLERANCE,
};

pub use builtin::{AnyValueComparator, ArrayUnpacker, NumberComparator, ObjectUnpacker};
pub use default::{assert_equal, compare, default_comparators, default_unpackers, is_equal};
