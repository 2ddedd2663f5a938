//! Core data model shared by every bus
//!
//! - **Errors**: [`ErrorNode`], [`ErrorTree`], [`Outcome`]
//! - **Names**: [`merge_names`], [`negate_name`], [`Operator`]
//! - **Values**: [`BusValue`], [`capture`]
//!
//! # Rich error information
//!
//! Failures are trees. Each node names the rule that rejected and the value
//! it rejected at that level, so a failure deep inside an array of objects
//! can be located without re-running anything:
//!
//! ```rust
//! use iobus::foundation::ErrorNode;
//! use serde_json::json;
//!
//! let error = ErrorNode::new("Cat", json!({ "age": -1 })).with_branches(
//!     ErrorNode::new("age", json!(-1))
//!         .with_branches(ErrorNode::new("isPositive", json!(-1))),
//! );
//! assert_eq!(error.total_count(), 3);
//! ```

pub mod error;
pub mod names;
pub mod value;

pub use error::{ErrorNode, ErrorTree, Outcome, accept, reject};
pub use names::{Operator, merge_names, negate_name};
pub use value::{BusValue, capture};

// ============================================================================
// UTILITIES
// ============================================================================

/// Collects per-item outcomes, keeping every failure.
///
/// Returns all accepted values in order, or the failures of every rejected
/// item, each wrapped by `wrap(index, tree)`, in ascending index order.
pub(crate) fn collect_all<T>(
    outcomes: impl IntoIterator<Item = Outcome<T>>,
    mut wrap: impl FnMut(usize, ErrorTree) -> ErrorNode,
) -> Result<Vec<T>, Vec<ErrorNode>> {
    let mut accepted = Vec::new();
    let mut failures = Vec::new();

    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(value) => accepted.push(value),
            Err(tree) => failures.push(wrap(index, tree)),
        }
    }

    if failures.is_empty() {
        Ok(accepted)
    } else {
        Err(failures)
    }
}
