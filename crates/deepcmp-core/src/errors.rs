//! Error taxonomy for comparison calls.
//!
//! Two registers:
//!
//! - **Bind-time errors** ([`BindError`]) abort the whole call before any
//!   traversal runs: invalid strategy schemas, unbound required options,
//!   unconsumed caller-supplied options.
//! - **Per-node causes** ([`Cause`], wrapped in [`CompareError`]) are
//!   recorded against a node's index and never abort sibling or ancestor
//!   processing; the engine always returns the complete list.

use crate::pair::Index;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Classification of a recorded per-node failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseKind {
    /// An unpack strategy detected a shape mismatch (key sets, lengths).
    StructuralMismatch,
    /// An equal strategy judged the values unequal.
    ValueMismatch,
    /// No strategy claimed the node.
    UnhandledType,
    /// A strategy signalled an internal failure distinct from a mismatch.
    StrategyFault,
}

impl CauseKind {
    /// Stable error code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            CauseKind::StructuralMismatch => "ERR_STRUCTURAL_MISMATCH",
            CauseKind::ValueMismatch => "ERR_VALUE_MISMATCH",
            CauseKind::UnhandledType => "ERR_UNHANDLED_TYPE",
            CauseKind::StrategyFault => "ERR_STRATEGY_FAULT",
        }
    }
}

/// Structured description of one recorded failure: kind, message, and the
/// offending value(s) where a strategy chose to attach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cause {
    kind: CauseKind,
    message: String,
    actual: Option<Value>,
    expected: Option<Value>,
}

impl Cause {
    /// A new cause of the given kind with an empty message.
    pub fn new(kind: CauseKind) -> Self {
        Self {
            kind,
            message: String::new(),
            actual: None,
            expected: None,
        }
    }

    /// Add a human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach both offending values.
    pub fn with_values(mut self, actual: Value, expected: Value) -> Self {
        self.actual = Some(actual);
        self.expected = Some(expected);
        self
    }

    /// The cause's kind.
    pub fn kind(&self) -> CauseKind {
        self.kind
    }

    /// The stable error code of the cause's kind.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending actual value, if attached.
    pub fn actual(&self) -> Option<&Value> {
        self.actual.as_ref()
    }

    /// The offending expected value, if attached.
    pub fn expected(&self) -> Option<&Value> {
        self.expected.as_ref()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.code())?;
        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }
        Ok(())
    }
}

/// A recorded terminal failure at one node of the comparison tree.
///
/// Created by the engine and returned to the caller, owned thereafter by the
/// caller. An empty list of compare errors means full equivalence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareError {
    /// Path from the comparison root to the failing node.
    pub index: Index,
    /// Structured description of the failure.
    pub cause: Cause,
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.cause)
    }
}

/// Bind-time failures. Any of these aborts the whole call before traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A strategy's declared option schema violates the binding contract.
    #[error("strategy `{strategy}` declares an invalid option schema: {reason}")]
    InvalidSchema { strategy: String, reason: String },

    /// Required options of a strategy remained unbound after binding.
    #[error("strategy `{strategy}` is missing required option(s): {}", .options.join(", "))]
    MissingRequiredOption {
        strategy: String,
        options: Vec<String>,
    },

    /// Caller-supplied option or alias keys were consumed by no strategy.
    #[error("unexpected option(s): {}", .keys.join(", "))]
    UnknownOption { keys: Vec<String> },
}

/// Aggregate of every recorded mismatch from one comparison call.
#[derive(Debug, Clone, PartialEq)]
pub struct NotEquivalent {
    /// All recorded errors, in traversal encounter order.
    pub errors: Vec<CompareError>,
}

impl fmt::Display for NotEquivalent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "actual and expected are not equivalent ({} mismatch(es)):",
            self.errors.len()
        )?;
        for error in &self.errors {
            writeln!(f, "  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for NotEquivalent {}

/// Failure surface of [`assert_equal`](crate::api::assert_equal).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquivalenceError {
    /// Binding failed; no traversal ran.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// Traversal completed and recorded at least one mismatch.
    #[error(transparent)]
    NotEquivalent(#[from] NotEquivalent),
}
