//! Tolerance-based comparison for JSON numbers.

use deepcmp_core::{
    BoundOptions, Cause, CauseKind, Comparator, EqualOutcome, OptionSpec, Pair, StrategySchema,
    ABSOLUTE_TOLERANCE, RELATIVE_TOLERANCE,
};

/// Default relative tolerance of [`NumberComparator`].
pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// Default absolute tolerance of [`NumberComparator`].
pub const DEFAULT_ABS_TOL: f64 = 0.0;

/// Judges JSON numbers by closeness.
///
/// Options:
/// - `rel_tol` (default `1e-9`), participating in [`RELATIVE_TOLERANCE`]
/// - `abs_tol` (default `0.0`), participating in [`ABSOLUTE_TOLERANCE`]
///
/// Two numbers are close when
/// `|a - e| <= max(rel_tol * max(|a|, |e|), abs_tol)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberComparator;

impl Comparator for NumberComparator {
    fn name(&self) -> &'static str {
        "number"
    }

    fn schema(&self) -> StrategySchema {
        StrategySchema::new()
            .with_option(OptionSpec::optional("rel_tol").with_alias(RELATIVE_TOLERANCE))
            .with_option(OptionSpec::optional("abs_tol").with_alias(ABSOLUTE_TOLERANCE))
    }

    fn compare(&self, pair: &Pair, options: &BoundOptions) -> EqualOutcome {
        let (Some(actual), Some(expected)) = (pair.actual.as_f64(), pair.expected.as_f64()) else {
            return EqualOutcome::Declined;
        };
        let rel_tol = options.f64("rel_tol").unwrap_or(DEFAULT_REL_TOL);
        let abs_tol = options.f64("abs_tol").unwrap_or(DEFAULT_ABS_TOL);

        if is_close(actual, expected, rel_tol, abs_tol) {
            return EqualOutcome::Equal;
        }
        EqualOutcome::Mismatch(
            Cause::new(CauseKind::ValueMismatch)
                .with_message(format!(
                    "{} is not close to {} (abs diff {:e}, rel_tol {:e}, abs_tol {:e})",
                    actual,
                    expected,
                    (actual - expected).abs(),
                    rel_tol,
                    abs_tol
                ))
                .with_values(pair.actual.clone(), pair.expected.clone()),
        )
    }
}

/// `|a - e| <= max(rel_tol * max(|a|, |e|), abs_tol)`, with exact equality
/// short-circuited so identical values never fail on tolerance arithmetic.
fn is_close(a: f64, e: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a == e {
        return true;
    }
    if a.is_infinite() || e.is_infinite() {
        return false;
    }
    (a - e).abs() <= f64::max(rel_tol * f64::max(a.abs(), e.abs()), abs_tol)
}
