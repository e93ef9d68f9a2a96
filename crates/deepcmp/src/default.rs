//! Default strategy assembly and convenience wrappers.
//!
//! The wrappers here pre-load the core entry points with the built-in
//! strategy lists so the common case needs no strategy plumbing. Callers
//! with custom strategies use [`api`](deepcmp_core::api) directly.

use crate::builtin::{AnyValueComparator, ArrayUnpacker, NumberComparator, ObjectUnpacker};
use deepcmp_core::{
    api, AliasValues, BindError, Comparator, CompareError, Config, EquivalenceError, Unpacker,
};
use serde_json::Value;

/// The default unpack strategies, in priority order.
pub fn default_unpackers() -> Vec<&'static dyn Unpacker> {
    vec![&ObjectUnpacker, &ArrayUnpacker]
}

/// The default equal strategies, in priority order.
///
/// Numbers are judged by tolerance before the deep-equality fallback sees
/// them; the fallback never declines, so no node ends up unhandled.
pub fn default_comparators() -> Vec<&'static dyn Comparator> {
    vec![&NumberComparator, &AnyValueComparator]
}

/// [`api::compare`] with the default strategy lists.
///
/// # Errors
///
/// Returns a [`BindError`] when a caller-supplied config key or alias is
/// consumed by no default strategy.
pub fn compare(
    actual: Value,
    expected: Value,
    aliases: &AliasValues,
    config: &Config,
) -> Result<Vec<CompareError>, BindError> {
    api::compare(
        actual,
        expected,
        &default_unpackers(),
        &default_comparators(),
        aliases,
        config,
    )
}

/// [`api::is_equal`] with the default strategy lists.
///
/// # Errors
///
/// Same bind-time failures as [`compare`].
pub fn is_equal(
    actual: Value,
    expected: Value,
    aliases: &AliasValues,
    config: &Config,
) -> Result<bool, BindError> {
    api::is_equal(
        actual,
        expected,
        &default_unpackers(),
        &default_comparators(),
        aliases,
        config,
    )
}

/// [`api::assert_equal`] with the default strategy lists.
///
/// # Errors
///
/// [`EquivalenceError::Bind`] for bind-time failures;
/// [`EquivalenceError::NotEquivalent`] enumerating every recorded mismatch.
pub fn assert_equal(
    actual: Value,
    expected: Value,
    aliases: &AliasValues,
    config: &Config,
) -> Result<(), EquivalenceError> {
    api::assert_equal(
        actual,
        expected,
        &default_unpackers(),
        &default_comparators(),
        aliases,
        config,
    )
}
