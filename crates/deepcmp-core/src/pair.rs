//! Comparison tree data model.
//!
//! A comparison call walks a tree of [`Pair`]s. Each pair carries the actual
//! and expected subvalues at one position, addressed by an [`Index`]: the
//! ordered path of mapping keys and sequence positions from the root.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One step of a path from the comparison root to a node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// A mapping key.
    Key(String),
    /// A sequence position.
    Item(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => write!(f, "{:?}", k),
            Segment::Item(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_owned())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(position: usize) -> Self {
        Segment::Item(position)
    }
}

/// Ordered path from the comparison root to a node.
///
/// Empty at the root; grows by exactly one segment per level of
/// decomposition. An index uniquely identifies a node's position within one
/// comparison call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Index(Vec<Segment>);

impl Index {
    /// The empty index of the root pair.
    pub fn root() -> Self {
        Self::default()
    }

    /// This index extended by one segment.
    pub fn child(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// The path segments in root-to-node order.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments, i.e. the node's depth.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// True for the root index.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Index {
    /// Renders as a tuple-style path: `()`, `("b",)`, `("b", 0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", segment)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl FromIterator<Segment> for Index {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Segment>> for Index {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

/// One node of the comparison tree.
///
/// Pairs are created by the engine (the root pair at call start, child pairs
/// when an unpack strategy fires) and dropped once processed. Strategies
/// receive pairs by shared reference and must not mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    /// Path from the comparison root to this node.
    pub index: Index,
    /// Subvalue of the actual side at this position.
    pub actual: Value,
    /// Subvalue of the expected side at this position.
    pub expected: Value,
}

impl Pair {
    /// The root pair of a comparison call.
    pub fn root(actual: Value, expected: Value) -> Self {
        Self {
            index: Index::root(),
            actual,
            expected,
        }
    }

    /// A child of this pair, one segment deeper.
    pub fn child(&self, segment: impl Into<Segment>, actual: Value, expected: Value) -> Self {
        Self {
            index: self.index.child(segment),
            actual,
            expected,
        }
    }
}
