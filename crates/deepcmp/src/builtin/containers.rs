//! Unpack strategies for JSON containers.

use deepcmp_core::{BoundOptions, Cause, CauseKind, Pair, UnpackOutcome, Unpacker};

/// Decomposes JSON objects into one child pair per key.
///
/// Differing key sets are a structural mismatch naming the extra and missing
/// keys; the node is then not descended. Children follow the actual object's
/// encounter order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectUnpacker;

impl Unpacker for ObjectUnpacker {
    fn name(&self) -> &'static str {
        "object"
    }

    fn unpack(&self, pair: &Pair, _options: &BoundOptions) -> UnpackOutcome {
        let (Some(actual), Some(expected)) = (pair.actual.as_object(), pair.expected.as_object())
        else {
            return UnpackOutcome::Declined;
        };

        let mut extra: Vec<&str> = actual
            .keys()
            .filter(|key| !expected.contains_key(*key))
            .map(String::as_str)
            .collect();
        let mut missing: Vec<&str> = expected
            .keys()
            .filter(|key| !actual.contains_key(*key))
            .map(String::as_str)
            .collect();
        if !extra.is_empty() || !missing.is_empty() {
            extra.sort_unstable();
            missing.sort_unstable();
            return UnpackOutcome::Mismatch(
                Cause::new(CauseKind::StructuralMismatch).with_message(format!(
                    "actual object keys mismatch expected: extra: [{}], missing: [{}]",
                    extra.join(", "),
                    missing.join(", ")
                )),
            );
        }

        UnpackOutcome::Children(
            actual
                .iter()
                .map(|(key, value)| {
                    pair.child(key.as_str(), value.clone(), expected[key.as_str()].clone())
                })
                .collect(),
        )
    }
}

/// Decomposes JSON arrays into one child pair per position.
///
/// Differing lengths are a structural mismatch citing both lengths; equal
/// lengths produce children at positions `0..n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayUnpacker;

impl Unpacker for ArrayUnpacker {
    fn name(&self) -> &'static str {
        "array"
    }

    fn unpack(&self, pair: &Pair, _options: &BoundOptions) -> UnpackOutcome {
        let (Some(actual), Some(expected)) = (pair.actual.as_array(), pair.expected.as_array())
        else {
            return UnpackOutcome::Declined;
        };

        if actual.len() != expected.len() {
            return UnpackOutcome::Mismatch(
                Cause::new(CauseKind::StructuralMismatch)
                    .with_message(format!(
                        "actual array length mismatches expected: {} != {}",
                        actual.len(),
                        expected.len()
                    ))
                    .with_values(pair.actual.clone(), pair.expected.clone()),
            );
        }

        UnpackOutcome::Children(
            actual
                .iter()
                .zip(expected)
                .enumerate()
                .map(|(position, (a, e))| pair.child(position, a.clone(), e.clone()))
                .collect(),
        )
    }
}
