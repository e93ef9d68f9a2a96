//! Shared test strategies for engine and api tests.
//!
//! The core knows nothing about concrete value shapes, so these minimal
//! strategies stand in for the built-ins that live in the facade crate.

use deepcmp_core::{
    BoundOptions, Cause, CauseKind, Comparator, EqualOutcome, OptionSpec, Pair, StrategySchema,
    UnpackOutcome, Unpacker,
};
use std::cell::{Cell, RefCell};

/// Unpacks JSON arrays; differing lengths are a structural mismatch.
#[allow(dead_code)]
pub struct SeqUnpacker {
    pub calls: Cell<usize>,
}

#[allow(dead_code)]
impl SeqUnpacker {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }
}

impl Unpacker for SeqUnpacker {
    fn name(&self) -> &'static str {
        "test_seq"
    }

    fn unpack(&self, pair: &Pair, _options: &BoundOptions) -> UnpackOutcome {
        self.calls.set(self.calls.get() + 1);
        let (Some(actual), Some(expected)) = (pair.actual.as_array(), pair.expected.as_array())
        else {
            return UnpackOutcome::Declined;
        };
        if actual.len() != expected.len() {
            return UnpackOutcome::Mismatch(
                Cause::new(CauseKind::StructuralMismatch).with_message(format!(
                    "actual sequence length mismatches expected: {} != {}",
                    actual.len(),
                    expected.len()
                )),
            );
        }
        UnpackOutcome::Children(
            actual
                .iter()
                .zip(expected)
                .enumerate()
                .map(|(i, (a, e))| pair.child(i, a.clone(), e.clone()))
                .collect(),
        )
    }
}

/// Exact equality on JSON numbers, recording the index of every judged pair.
#[allow(dead_code)]
pub struct ExactNumber {
    pub seen: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl ExactNumber {
    pub fn new() -> Self {
        Self {
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Comparator for ExactNumber {
    fn name(&self) -> &'static str {
        "test_exact_number"
    }

    fn compare(&self, pair: &Pair, _options: &BoundOptions) -> EqualOutcome {
        if !pair.actual.is_number() || !pair.expected.is_number() {
            return EqualOutcome::Declined;
        }
        self.seen.borrow_mut().push(pair.index.to_string());
        if pair.actual == pair.expected {
            EqualOutcome::Equal
        } else {
            EqualOutcome::NotEqual
        }
    }
}

/// Comparator with a required `threshold` option; counts invocations so
/// tests can prove bind-time failures precede any traversal.
#[allow(dead_code)]
pub struct ThresholdComparator {
    pub calls: Cell<usize>,
}

#[allow(dead_code)]
impl ThresholdComparator {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }
}

impl Comparator for ThresholdComparator {
    fn name(&self) -> &'static str {
        "test_threshold"
    }

    fn schema(&self) -> StrategySchema {
        StrategySchema::new().with_option(OptionSpec::required("threshold"))
    }

    fn compare(&self, pair: &Pair, options: &BoundOptions) -> EqualOutcome {
        self.calls.set(self.calls.get() + 1);
        let (Some(actual), Some(expected)) = (pair.actual.as_f64(), pair.expected.as_f64()) else {
            return EqualOutcome::Declined;
        };
        // Required by schema, so always bound here.
        let threshold = options.f64("threshold").unwrap_or(0.0);
        if (actual - expected).abs() <= threshold {
            EqualOutcome::Equal
        } else {
            EqualOutcome::NotEqual
        }
    }
}

/// Signals an internal fault for one magic number, judges the rest equal.
#[allow(dead_code)]
pub struct FaultyAtThirteen;

impl Comparator for FaultyAtThirteen {
    fn name(&self) -> &'static str {
        "test_faulty_at_thirteen"
    }

    fn compare(&self, pair: &Pair, _options: &BoundOptions) -> EqualOutcome {
        if pair.actual == serde_json::json!(13) {
            return EqualOutcome::Mismatch(
                Cause::new(CauseKind::StrategyFault).with_message("refusing to judge 13"),
            );
        }
        EqualOutcome::Equal
    }
}
