//! Pluggable unpack and equal strategy interfaces.
//!
//! The engine is a generic dispatcher: it knows nothing about concrete value
//! shapes beyond the ordered strategy lists it is given. Each strategy is
//! tried in caller-declared priority order and returns a tri-state outcome —
//! declined is distinct from both success and error, and means "I do not
//! handle this pair's shape; ask the next strategy".

use crate::binder::{BoundOptions, StrategySchema};
use crate::errors::Cause;
use crate::pair::Pair;

/// Outcome of one unpack attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum UnpackOutcome {
    /// The strategy does not handle this pair's shape.
    Declined,
    /// The pair decomposed into child pairs, in encounter order.
    Children(Vec<Pair>),
    /// The pair is composite but structurally mismatched; the node is
    /// recorded and not descended.
    Mismatch(Cause),
}

/// Outcome of one equality judgement.
#[derive(Debug, Clone, PartialEq)]
pub enum EqualOutcome {
    /// The strategy does not handle this pair's shape.
    Declined,
    /// The values are equivalent.
    Equal,
    /// The values differ; the engine records a generic value mismatch
    /// carrying both values.
    NotEqual,
    /// The values differ in a way the strategy can describe itself, or the
    /// strategy hit an internal fault; recorded as-is.
    Mismatch(Cause),
}

/// Decomposes composite pairs into child pairs.
///
/// Implementations must decline rather than error for shapes they do not
/// handle, and must not mutate the pair they receive.
pub trait Unpacker {
    /// Stable, unique strategy name used in bind-time diagnostics.
    fn name(&self) -> &'static str;

    /// Declared configuration options; empty by default.
    fn schema(&self) -> StrategySchema {
        StrategySchema::default()
    }

    /// Attempt to decompose the pair.
    fn unpack(&self, pair: &Pair, options: &BoundOptions) -> UnpackOutcome;
}

/// Judges leaf-level equivalence.
///
/// Same contract as [`Unpacker`]: decline for unhandled shapes, never mutate
/// the pair.
pub trait Comparator {
    /// Stable, unique strategy name used in bind-time diagnostics.
    fn name(&self) -> &'static str;

    /// Declared configuration options; empty by default.
    fn schema(&self) -> StrategySchema {
        StrategySchema::default()
    }

    /// Attempt to judge the pair.
    fn compare(&self, pair: &Pair, options: &BoundOptions) -> EqualOutcome;
}
