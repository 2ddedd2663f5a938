//! Named predicates with AND / OR / NOT composition
//!
//! A [`Condition`] checks a value and either passes (`None`) or explains the
//! failure as an [`ErrorTree`]. Composite conditions keep the failures of
//! their operands as branches under the composite name, so a gate built from
//! `isFinite AND !isNaN` reports which side rejected.
//!
//! # Examples
//!
//! ```rust
//! use iobus::condition::Condition;
//!
//! let even = Condition::new("isEven", |n: &i64| n % 2 == 0);
//! let small = Condition::new("isSmall", |n: &i64| *n < 10);
//!
//! let both = even.and(&small);
//! assert_eq!(both.name(), "isEven AND isSmall");
//! assert!(both.passes(&4));
//!
//! let failure = both.check(&13).unwrap();
//! assert_eq!(failure.nodes()[0].branches.len(), 2);
//! ```

use crate::foundation::value::guard_test;
use crate::foundation::{BusValue, ErrorNode, ErrorTree, Operator, capture, merge_names, negate_name};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type Check<I> = Arc<dyn Fn(&I) -> Option<ErrorTree> + Send + Sync>;

/// A named, composable predicate.
///
/// Conditions are immutable and cheap to clone; composing two conditions
/// builds a new one and leaves both operands untouched.
pub struct Condition<I> {
    name: Cow<'static, str>,
    check: Check<I>,
}

impl<I> Clone for Condition<I> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            check: Arc::clone(&self.check),
        }
    }
}

impl<I> fmt::Debug for Condition<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").field("name", &self.name).finish()
    }
}

impl<I: BusValue> Condition<I> {
    /// Wraps a boolean test.
    ///
    /// A failing test produces a single leaf `{condition: name, value}`. A
    /// panicking test fails the same way, with the panic message attached.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, test: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        let leaf_name = name.clone();

        Self {
            name,
            check: Arc::new(move |input: &I| match guard_test(&leaf_name, || test(input)) {
                Ok(true) => None,
                Ok(false) => Some(ErrorNode::new(leaf_name.clone(), capture(input)).into()),
                Err(message) => Some(
                    ErrorNode::new(leaf_name.clone(), capture(input))
                        .with_message(format!("Unexpected panic: {message}"))
                        .into(),
                ),
            }),
        }
    }

    /// The display name of this condition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks `input`, returning the failure explanation if it does not pass.
    pub fn check(&self, input: &I) -> Option<ErrorTree> {
        (self.check)(input)
    }

    /// Returns true if `input` passes.
    pub fn passes(&self, input: &I) -> bool {
        self.check(input).is_none()
    }

    /// Both conditions must pass. Named `self AND other`.
    ///
    /// Both sides are always checked; the failures of every failing side are
    /// nested under the composite node, left first.
    pub fn and(&self, other: &Condition<I>) -> Condition<I> {
        let name = merge_names(&self.name, &other.name, Operator::And);
        self.and_named(other, name)
    }

    /// Like [`and`](Self::and) with an explicit name.
    pub fn and_named(&self, other: &Condition<I>, name: impl Into<Cow<'static, str>>) -> Condition<I> {
        let name = name.into();
        let node_name = name.clone();
        let (us, them) = (Arc::clone(&self.check), Arc::clone(&other.check));

        Self {
            name,
            check: Arc::new(move |input: &I| {
                let failures = us(input)
                    .unwrap_or_default()
                    .concat(them(input).unwrap_or_default());

                if failures.is_empty() {
                    None
                } else {
                    Some(
                        ErrorNode::new(node_name.clone(), capture(input))
                            .with_branches(failures)
                            .into(),
                    )
                }
            }),
        }
    }

    /// At least one condition must pass. Named `self OR other`.
    ///
    /// `other` is only checked when `self` fails.
    pub fn or(&self, other: &Condition<I>) -> Condition<I> {
        let name = merge_names(&self.name, &other.name, Operator::Or);
        self.or_named(other, name)
    }

    /// Like [`or`](Self::or) with an explicit name.
    pub fn or_named(&self, other: &Condition<I>, name: impl Into<Cow<'static, str>>) -> Condition<I> {
        let name = name.into();
        let node_name = name.clone();
        let (us, them) = (Arc::clone(&self.check), Arc::clone(&other.check));

        Self {
            name,
            check: Arc::new(move |input: &I| {
                let left = us(input)?;
                let right = them(input)?;

                Some(
                    ErrorNode::new(node_name.clone(), capture(input))
                        .with_branches(left.concat(right))
                        .into(),
                )
            }),
        }
    }

    /// Inverts this condition. Named `!self`.
    pub fn not(&self) -> Condition<I> {
        self.not_named(negate_name(&self.name))
    }

    /// Like [`not`](Self::not) with an explicit name.
    pub fn not_named(&self, name: impl Into<Cow<'static, str>>) -> Condition<I> {
        let name = name.into();
        let node_name = name.clone();
        let inner = Arc::clone(&self.check);

        Self {
            name,
            check: Arc::new(move |input: &I| match inner(input) {
                Some(_) => None,
                None => Some(ErrorNode::new(node_name.clone(), capture(input)).into()),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
