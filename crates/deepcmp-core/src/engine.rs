//! Worklist-driven comparison traversal.
//!
//! A single `VecDeque` worklist is seeded with the root pair. Per dequeued
//! pair, unpack strategies are tried first in priority order; the first one
//! not declining wins and any remaining unpack strategies are skipped.
//! Children are re-enqueued at the front of the worklist preserving their
//! relative order, so a node's whole subtree resolves before its later
//! siblings (depth-first, left-to-right). Only when every unpack strategy
//! declined are the equal strategies consulted.
//!
//! Once binding has succeeded the traversal always runs to completion: a
//! node's error never suppresses sibling or ancestor processing.

use crate::binder::BoundOptions;
use crate::errors::{Cause, CauseKind, CompareError};
use crate::pair::Pair;
use crate::strategy::{Comparator, EqualOutcome, Unpacker, UnpackOutcome};
use serde_json::Value;
use std::collections::VecDeque;

/// Strategy lists with their per-call resolved options, in priority order.
pub(crate) struct BoundStrategies<'a> {
    pub(crate) unpackers: Vec<(&'a dyn Unpacker, BoundOptions)>,
    pub(crate) comparators: Vec<(&'a dyn Comparator, BoundOptions)>,
}

/// Runtime type name of a JSON value, for diagnostics.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Drive one comparison call from the root pair to the complete, ordered
/// list of recorded errors. An empty list means full equivalence.
pub(crate) fn run(root: Pair, strategies: &BoundStrategies<'_>) -> Vec<CompareError> {
    let mut worklist: VecDeque<Pair> = VecDeque::new();
    worklist.push_back(root);
    let mut errors: Vec<CompareError> = Vec::new();
    let mut visited = 0usize;

    while let Some(pair) = worklist.pop_front() {
        visited += 1;
        tracing::trace!(index = %pair.index, "comparing node");

        // Phase 1: unpack. First non-declining strategy wins.
        let mut unpacked = false;
        for (unpacker, options) in &strategies.unpackers {
            match unpacker.unpack(&pair, options) {
                UnpackOutcome::Declined => continue,
                UnpackOutcome::Children(children) => {
                    // Front re-insertion in reverse keeps child 0 first, so
                    // the subtree fully resolves before later siblings.
                    for child in children.into_iter().rev() {
                        worklist.push_front(child);
                    }
                }
                UnpackOutcome::Mismatch(cause) => {
                    errors.push(CompareError {
                        index: pair.index.clone(),
                        cause,
                    });
                }
            }
            unpacked = true;
            break;
        }
        if unpacked {
            continue;
        }

        // Phase 2: equality. First non-declining strategy wins.
        let mut judged = false;
        for (comparator, options) in &strategies.comparators {
            let cause = match comparator.compare(&pair, options) {
                EqualOutcome::Declined => continue,
                EqualOutcome::Equal => None,
                EqualOutcome::NotEqual => Some(
                    Cause::new(CauseKind::ValueMismatch)
                        .with_message(format!(
                            "{} is not equal to {}",
                            pair.actual, pair.expected
                        ))
                        .with_values(pair.actual.clone(), pair.expected.clone()),
                ),
                EqualOutcome::Mismatch(cause) => Some(cause),
            };
            if let Some(cause) = cause {
                errors.push(CompareError {
                    index: pair.index.clone(),
                    cause,
                });
            }
            judged = true;
            break;
        }
        if !judged {
            errors.push(CompareError {
                index: pair.index.clone(),
                cause: Cause::new(CauseKind::UnhandledType)
                    .with_message(format!(
                        "unable to compare {} of type {} and {} of type {}",
                        pair.actual,
                        value_type_name(&pair.actual),
                        pair.expected,
                        value_type_name(&pair.expected)
                    ))
                    .with_values(pair.actual.clone(), pair.expected.clone()),
            });
        }
    }

    tracing::debug!(
        nodes = visited,
        errors = errors.len(),
        "comparison traversal complete"
    );
    errors
}
