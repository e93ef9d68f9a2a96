//! Public comparison entry points.
//!
//! These compose the binder and the engine for one comparison call. All three
//! entry points fail fast with a [`BindError`] before any traversal runs;
//! per-node mismatches never raise here — [`compare`] and [`is_equal`] report
//! them in their return value, and [`assert_equal`] aggregates them into one
//! failure naming every index and cause.

use crate::binder::{AliasValues, CallBinder, Config};
use crate::engine::{self, BoundStrategies};
use crate::errors::{BindError, CompareError, EquivalenceError, NotEquivalent};
use crate::pair::Pair;
use crate::strategy::{Comparator, Unpacker};
use serde_json::Value;

/// Deep-compare `actual` against `expected` with the given strategy lists.
///
/// Unpack and equal strategies are tried in slice order. Returns the full
/// ordered list of recorded errors; an empty list means full equivalence.
///
/// # Errors
///
/// Returns a [`BindError`] — before any traversal — when a strategy declares
/// an invalid option schema, a required option remains unbound, or a
/// caller-supplied config key or alias is consumed by no strategy.
pub fn compare(
    actual: Value,
    expected: Value,
    unpackers: &[&dyn Unpacker],
    comparators: &[&dyn Comparator],
    aliases: &AliasValues,
    config: &Config,
) -> Result<Vec<CompareError>, BindError> {
    let mut binder = CallBinder::new(config, aliases);

    let mut bound_unpackers = Vec::with_capacity(unpackers.len());
    for unpacker in unpackers {
        bound_unpackers.push((*unpacker, binder.bind(unpacker.name(), &unpacker.schema())?));
    }
    let mut bound_comparators = Vec::with_capacity(comparators.len());
    for comparator in comparators {
        bound_comparators.push((
            *comparator,
            binder.bind(comparator.name(), &comparator.schema())?,
        ));
    }
    binder.finish()?;

    tracing::debug!(
        unpackers = unpackers.len(),
        comparators = comparators.len(),
        "starting comparison"
    );
    Ok(engine::run(
        Pair::root(actual, expected),
        &BoundStrategies {
            unpackers: bound_unpackers,
            comparators: bound_comparators,
        },
    ))
}

/// True when [`compare`] records no errors.
///
/// # Errors
///
/// Same bind-time failures as [`compare`].
pub fn is_equal(
    actual: Value,
    expected: Value,
    unpackers: &[&dyn Unpacker],
    comparators: &[&dyn Comparator],
    aliases: &AliasValues,
    config: &Config,
) -> Result<bool, BindError> {
    Ok(compare(actual, expected, unpackers, comparators, aliases, config)?.is_empty())
}

/// Succeed silently when the values are equivalent.
///
/// # Errors
///
/// [`EquivalenceError::Bind`] for the bind-time failures of [`compare`];
/// [`EquivalenceError::NotEquivalent`] when the traversal recorded at least
/// one mismatch, enumerating every `(index, cause)` pair.
pub fn assert_equal(
    actual: Value,
    expected: Value,
    unpackers: &[&dyn Unpacker],
    comparators: &[&dyn Comparator],
    aliases: &AliasValues,
    config: &Config,
) -> Result<(), EquivalenceError> {
    let errors = compare(actual, expected, unpackers, comparators, aliases, config)?;
    if errors.is_empty() {
        return Ok(());
    }
    Err(NotEquivalent { errors }.into())
}
