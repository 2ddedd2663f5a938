//! Error tree types for rejected decodes and encodes
//!
//! Every failure is an [`ErrorNode`]: the name of the rule that rejected,
//! the value it rejected at that exact level, and the child failures that
//! explain it. A rejected [`Outcome`] carries an [`ErrorTree`], an ordered
//! list of such nodes.
//!
//! All string fields use `Cow<'static, str>` so that static bus and
//! condition names do not allocate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of a decode, an encode or a structural step.
///
/// `Ok` is an accepted value, `Err` the explanation of the rejection.
pub type Outcome<T> = Result<T, ErrorTree>;

/// Shorthand for an accepted outcome.
#[inline]
pub fn accept<T>(value: T) -> Outcome<T> {
    Ok(value)
}

/// Shorthand for a rejected outcome.
///
/// Accepts anything that converts into an [`ErrorTree`], usually a single
/// [`ErrorNode`].
///
/// # Examples
///
/// ```rust
/// use iobus::foundation::{ErrorNode, Outcome, reject};
/// use serde_json::json;
///
/// let outcome: Outcome<u8> = reject(ErrorNode::new("isByte", json!(300)));
/// assert_eq!(outcome.unwrap_err().nodes()[0].condition, "isByte");
/// ```
#[inline]
pub fn reject<T>(errors: impl Into<ErrorTree>) -> Outcome<T> {
    Err(errors.into())
}

// ============================================================================
// ERROR NODE
// ============================================================================

/// A single failure record.
///
/// Leaves name the rule that rejected a value; inner nodes name the
/// composite (chain, alternation, gate, object field, array index, ...) and
/// carry the failures of its parts as `branches`.
///
/// Serializes as `{ condition, value, branches?, message? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorNode {
    /// Name of the failing bus, condition, field key or index.
    pub condition: Cow<'static, str>,

    /// The rejected input at the level where rejection happened.
    pub value: Value,

    /// Child failures, empty for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<ErrorNode>,

    /// Free-text diagnostic for parse, conversion and panic failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
}

impl ErrorNode {
    /// Creates a leaf node.
    pub fn new(condition: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self {
            condition: condition.into(),
            value,
            branches: Vec::new(),
            message: None,
        }
    }

    /// Nests `branches` under this node.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_branches(mut self, branches: impl Into<ErrorTree>) -> Self {
        self.branches = branches.into().into_nodes();
        self
    }

    /// Attaches a free-text message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns true if this node has no branches.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Number of nodes in this subtree, including this one.
    #[must_use]
    pub fn total_count(&self) -> usize {
        1 + self.branches.iter().map(ErrorNode::total_count).sum::<usize>()
    }

    /// All nodes of this subtree, depth-first, parents before children.
    #[must_use]
    pub fn flatten(&self) -> Vec<&ErrorNode> {
        let mut result = vec![self];
        for branch in &self.branches {
            result.extend(branch.flatten());
        }
        result
    }

    /// Leaves of this subtree, left to right.
    #[must_use]
    pub fn leaves(&self) -> Vec<&ErrorNode> {
        self.flatten().into_iter().filter(|n| n.is_leaf()).collect()
    }
}

// ============================================================================
// ERROR TREE
// ============================================================================

/// Ordered list of failures carried by a rejected [`Outcome`].
///
/// Most rejections hold exactly one top-level node; concatenation is plain
/// append and never de-duplicates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", crate::humanize::humanize_nodes(.0))]
pub struct ErrorTree(Vec<ErrorNode>);

impl ErrorTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `other` after this tree's nodes.
    #[must_use = "concat returns the combined tree"]
    pub fn concat(mut self, other: ErrorTree) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Appends a single node.
    pub fn push(&mut self, node: ErrorNode) {
        self.0.push(node);
    }

    /// Number of top-level nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Top-level nodes.
    #[must_use]
    pub fn nodes(&self) -> &[ErrorNode] {
        &self.0
    }

    /// Iterates over the top-level nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorNode> {
        self.0.iter()
    }

    /// Consumes the tree and returns its nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<ErrorNode> {
        self.0
    }

    /// Number of nodes across the whole tree.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.0.iter().map(ErrorNode::total_count).sum()
    }
}

impl From<ErrorNode> for ErrorTree {
    fn from(node: ErrorNode) -> Self {
        Self(vec![node])
    }
}

impl From<Vec<ErrorNode>> for ErrorTree {
    fn from(nodes: Vec<ErrorNode>) -> Self {
        Self(nodes)
    }
}

impl FromIterator<ErrorNode> for ErrorTree {
    fn from_iter<T: IntoIterator<Item = ErrorNode>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ErrorTree {
    type Item = ErrorNode;
    type IntoIter = std::vec::IntoIter<ErrorNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorTree {
    type Item = &'a ErrorNode;
    type IntoIter = std::slice::Iter<'a, ErrorNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
