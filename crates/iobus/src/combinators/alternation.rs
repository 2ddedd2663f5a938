//! Alternation: `a | b`
//!
//! Left-biased fallback. `b` only runs when `a` rejects, and it receives the
//! original input rather than anything `a` produced. When both reject, their
//! failures become sibling branches, `a`'s first.

use crate::bus::{Bus, Transform};
use crate::foundation::{BusValue, ErrorNode, Operator, capture, merge_names};
use std::borrow::Cow;
use std::sync::Arc;

fn fallback<A, B>(name: Cow<'static, str>, us: Transform<A, B>, them: Transform<A, B>) -> Transform<A, B>
where
    A: BusValue,
    B: 'static,
{
    Arc::new(move |input: &A| {
        let ours = match us(input) {
            Ok(value) => return Ok(value),
            Err(tree) => tree,
        };
        let theirs = match them(input) {
            Ok(value) => return Ok(value),
            Err(tree) => tree,
        };

        tracing::trace!(bus = %name, "both alternatives rejected");
        Err(ErrorNode::new(name.clone(), capture(input))
            .with_branches(ours.concat(theirs))
            .into())
    })
}

impl<I: BusValue, O: BusValue> Bus<I, O> {
    /// Falls back to `other` when this bus rejects. Named `self | other`.
    ///
    /// Encoding follows the same policy on the internal value.
    #[must_use = "combinators return a new bus"]
    pub fn or_else(&self, other: &Bus<I, O>) -> Bus<I, O> {
        let name = merge_names(self.name(), other.name(), Operator::Else);
        self.or_else_named(other, name)
    }

    /// Like [`or_else`](Self::or_else) with an explicit name.
    #[must_use = "combinators return a new bus"]
    pub fn or_else_named(&self, other: &Bus<I, O>, name: impl Into<Cow<'static, str>>) -> Bus<I, O> {
        let name = name.into();

        Bus::assemble(
            name.clone(),
            fallback(name.clone(), self.decoder(), other.decoder()),
            fallback(name, self.encoder(), other.encoder()),
        )
    }
}
