//! Gating a bus behind a condition
//!
//! `bus.gate("isPositive", &condition)` produces a bus named
//! `isPositive(bus)`. Decoding checks the condition on the decoded value;
//! encoding checks it before the inner encode runs. A failed check yields one
//! node named after the gated bus whose branches are the condition's own
//! failure.

use crate::bus::{Bus, Transform};
use crate::condition::Condition;
use crate::foundation::{BusValue, ErrorNode, capture};
use std::borrow::Cow;
use std::sync::Arc;

impl<I: BusValue, O: BusValue> Bus<I, O> {
    /// Gates the decoded value through `condition`. Named `name(self)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iobus::prelude::*;
    ///
    /// let positive = Condition::new("isPositive", |n: &i64| *n > 0);
    /// let id = Bus::create("id", |n: &i64| accept(*n), |n: &i64| accept(*n));
    /// let bus = id.gate("isPositive", &positive);
    ///
    /// assert_eq!(bus.name(), "isPositive(id)");
    /// let tree = bus.decode(&-1).unwrap_err();
    /// assert_eq!(tree.nodes()[0].branches[0].condition, "isPositive");
    /// ```
    #[must_use = "combinators return a new bus"]
    pub fn gate(&self, name: &str, condition: &Condition<O>) -> Bus<I, O> {
        self.gate_named(format!("{name}({})", self.name()), condition)
    }

    /// Like [`gate`](Self::gate) with the full bus name given explicitly.
    #[must_use = "combinators return a new bus"]
    pub fn gate_named(&self, full_name: impl Into<Cow<'static, str>>, condition: &Condition<O>) -> Bus<I, O> {
        let name = full_name.into();

        let decoder: Transform<I, O> = {
            let (name, inner, condition) = (name.clone(), self.decoder(), condition.clone());
            Arc::new(move |input: &I| {
                let decoded = inner(input)?;
                match condition.check(&decoded) {
                    None => Ok(decoded),
                    Some(failure) => Err(ErrorNode::new(name.clone(), capture(input))
                        .with_branches(failure)
                        .into()),
                }
            })
        };

        let encoder: Transform<O, I> = {
            let (name, inner, condition) = (name.clone(), self.encoder(), condition.clone());
            Arc::new(move |output: &O| {
                if let Some(failure) = condition.check(output) {
                    return Err(ErrorNode::new(name.clone(), capture(output))
                        .with_branches(failure)
                        .into());
                }
                inner(output)
            })
        };

        Bus::assemble(name, decoder, encoder)
    }

    /// Gates with a plain predicate, named `name` both as the condition and
    /// in the gated bus name `name(self)`.
    #[must_use = "combinators return a new bus"]
    pub fn ensure<F>(&self, name: &str, predicate: F) -> Bus<I, O>
    where
        F: Fn(&O) -> bool + Send + Sync + 'static,
    {
        self.gate(name, &Condition::new(name.to_owned(), predicate))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use serde_json::json;

    fn identity() -> Bus<i64, i64> {
        Bus::create("id", |n: &i64| accept(*n), |n: &i64| accept(*n))
    }

    #[test]
    fn test_gate_passes() {
        let bus = identity().ensure("isEven", |n| n % 2 == 0);
        assert_eq!(bus.decode(&4).unwrap(), 4);
        assert_eq!(bus.encode(&4).unwrap(), 4);
    }

    #[test]
    fn test_gate_failure_shape() {
        let tree = identity().ensure("isEven", |n| n % 2 == 0).decode(&3).unwrap_err();
        assert_eq!(
            tree.nodes(),
            [ErrorNode::new("isEven(id)", json!(3))
                .with_branches(ErrorNode::new("isEven", json!(3)))]
        );
    }

    #[test]
    fn test_gate_reports_raw_input_and_decoded_value() {
        let length: Bus<String, usize> =
            Bus::create("length", |s: &String| accept(s.len()), |n: &usize| accept("x".repeat(*n)));
        let tree = length.ensure("isShort", |n| *n < 3).decode(&"long".to_owned()).unwrap_err();

        let node = &tree.nodes()[0];
        assert_eq!(node.value, json!("long"));
        assert_eq!(node.branches[0].value, json!(4));
    }

    #[test]
    fn test_encode_checks_before_inner() {
        let bus: Bus<i64, i64> = Bus::create("fragile", |n: &i64| accept(*n), |_: &i64| panic!("must not run"))
            .ensure("isZero", |n| *n == 0);
        let tree = bus.encode(&5).unwrap_err();
        assert_eq!(tree.nodes()[0].condition, "isZero(fragile)");
        assert!(tree.nodes()[0].branches[0].message.is_none());
    }

    #[test]
    fn test_inner_failure_is_not_wrapped() {
        let failing: Bus<i64, i64> =
            Bus::create("never", |n: &i64| reject(ErrorNode::new("never", capture(n))), |n: &i64| accept(*n));
        let tree = failing.ensure("isEven", |n| n % 2 == 0).decode(&2).unwrap_err();
        assert_eq!(tree.nodes()[0].condition, "never");
    }

    #[test]
    fn test_gate_named_overrides_node_name() {
        let even = Condition::new("isEven", |n: &i64| n % 2 == 0);
        let bus = identity().gate_named("evenId", &even);
        assert_eq!(bus.name(), "evenId");

        let tree = bus.decode(&3).unwrap_err();
        assert_eq!(
            tree.nodes(),
            [ErrorNode::new("evenId", json!(3)).with_branches(ErrorNode::new("isEven", json!(3)))]
        );
        assert_eq!(bus.encode(&5).unwrap_err().nodes()[0].condition, "evenId");
    }

    #[test]
    fn test_nested_gates_nest_names() {
        let bus = identity().ensure("a", |_| true).ensure("b", |_| true);
        assert_eq!(bus.name(), "b(a(id))");
    }

    #[test]
    fn test_composite_condition_branches() {
        let finite = Condition::new("isFinite", |n: &f64| n.is_finite());
        let nan = Condition::new("isNaN", |n: &f64| n.is_nan());
        let valid = finite.and(&nan.not());

        let bus: Bus<f64, f64> = Bus::create("float", |n: &f64| accept(*n), |n: &f64| accept(*n));
        let tree = bus.gate("isValid", &valid).decode(&f64::INFINITY).unwrap_err();

        let gate = &tree.nodes()[0];
        assert_eq!(gate.condition, "isValid(float)");
        assert_eq!(gate.branches[0].condition, "isFinite AND !isNaN");
        assert_eq!(gate.branches[0].branches[0].condition, "isFinite");
    }
}
