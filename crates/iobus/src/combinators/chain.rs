//! Sequencing: `a -> b`
//!
//! Decoding runs `a` and feeds its output to `b`; encoding runs the mirror,
//! `b.encode` first and then `a.encode`. A failure in either stage is
//! wrapped under one node named after the chain, so the path through the
//! pipeline stays visible in the error tree.

use crate::bus::{Bus, Transform};
use crate::foundation::{BusValue, ErrorNode, ErrorTree, Operator, capture, merge_names};
use std::borrow::Cow;
use std::sync::Arc;

/// Runs `first` then `second`, wrapping a failure of either under `name`.
fn sequence<A, B, C>(
    name: Cow<'static, str>,
    first: Transform<A, B>,
    second: Transform<B, C>,
) -> Transform<A, C>
where
    A: BusValue,
    B: 'static,
    C: 'static,
{
    Arc::new(move |input: &A| {
        let wrap = |tree: ErrorTree| -> ErrorTree {
            ErrorNode::new(name.clone(), capture(input))
                .with_branches(tree)
                .into()
        };

        let intermediate = first(input).map_err(wrap)?;
        second(&intermediate).map_err(wrap)
    })
}

impl<I: BusValue, M: BusValue> Bus<I, M> {
    /// Sequences this bus with `other`. Named `self -> other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iobus::prelude::*;
    ///
    /// let double = Bus::create("double", |n: &i64| accept(n * 2), |n: &i64| accept(n / 2));
    /// let eight = double.chain(&double).chain(&double);
    ///
    /// assert_eq!(eight.name(), "double -> double -> double");
    /// assert_eq!(eight.decode(&1).unwrap(), 8);
    /// assert_eq!(eight.encode(&8).unwrap(), 1);
    /// ```
    #[must_use = "combinators return a new bus"]
    pub fn chain<O: BusValue>(&self, other: &Bus<M, O>) -> Bus<I, O> {
        let name = merge_names(self.name(), other.name(), Operator::Chain);
        self.chain_named(other, name)
    }

    /// Like [`chain`](Self::chain) with an explicit name.
    #[must_use = "combinators return a new bus"]
    pub fn chain_named<O: BusValue>(
        &self,
        other: &Bus<M, O>,
        name: impl Into<Cow<'static, str>>,
    ) -> Bus<I, O> {
        let name = name.into();

        Bus::assemble(
            name.clone(),
            sequence(name.clone(), self.decoder(), other.decoder()),
            sequence(name, other.encoder(), self.encoder()),
        )
    }
}
