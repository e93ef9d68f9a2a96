//! deepcmp-core - generic deep structural equivalence engine
//!
//! This crate provides the comparison core for deep structural equivalence
//! checking in test assertions:
//! - Pair/Index data model for nodes of the comparison tree
//! - Parameter binder resolving per-strategy options from a flat caller
//!   configuration plus cross-cutting aliases
//! - Worklist-driven comparison engine dispatching over caller-supplied
//!   unpack and equal strategies
//! - `compare` / `is_equal` / `assert_equal` entry points
//!
//! The engine does not itself know how to decompose or compare any concrete
//! value shape; built-in strategies and default strategy lists live in the
//! `deepcmp` facade crate.

pub mod alias;
pub mod api;
pub mod binder;
mod engine;
pub mod errors;
pub mod pair;
pub mod strategy;

// Re-export commonly used types
pub use alias::{Alias, ABSOLUTE_TOLERANCE, RELATIVE_TOLERANCE};
pub use api::{assert_equal, compare, is_equal};
pub use binder::{AliasValues, BoundOptions, Config, OptionSpec, StrategySchema};
pub use errors::{BindError, Cause, CauseKind, CompareError, EquivalenceError, NotEquivalent};
pub use pair::{Index, Pair, Segment};
pub use strategy::{Comparator, EqualOutcome, UnpackOutcome, Unpacker};
