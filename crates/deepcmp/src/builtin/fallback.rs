//! Last-resort comparator.

use deepcmp_core::{BoundOptions, Comparator, EqualOutcome, Pair};

/// Deep `Value` equality over whatever no earlier strategy claimed.
///
/// Never declines, so placing it last in a comparator list guarantees every
/// leaf gets judged instead of falling through to an unhandled-type error.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyValueComparator;

impl Comparator for AnyValueComparator {
    fn name(&self) -> &'static str {
        "any_value"
    }

    fn compare(&self, pair: &Pair, _options: &BoundOptions) -> EqualOutcome {
        if pair.actual == pair.expected {
            EqualOutcome::Equal
        } else {
            EqualOutcome::NotEqual
        }
    }
}
