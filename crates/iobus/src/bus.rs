//! The bidirectional converter
//!
//! A [`Bus`] pairs a `decode` transform (external → internal) with an
//! `encode` transform (internal → external) under a display name. Buses are
//! immutable; every combinator returns a new bus that shares the transforms
//! of its operands.
//!
//! # Examples
//!
//! ```rust
//! use iobus::prelude::*;
//!
//! let double = Bus::create(
//!     "double",
//!     |n: &i64| accept(n * 2),
//!     |n: &i64| accept(n / 2),
//! );
//!
//! assert_eq!(double.decode(&4).unwrap(), 8);
//! assert_eq!(double.encode(&8).unwrap(), 4);
//! ```

use crate::foundation::value::guard;
use crate::foundation::{BusValue, Outcome};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Shared transform from `A` to `B`.
pub(crate) type Transform<A, B> = Arc<dyn Fn(&A) -> Outcome<B> + Send + Sync>;

/// A named, immutable pair of converters between `I` and `O`.
///
/// Cloning is cheap: the transforms are reference counted.
pub struct Bus<I, O> {
    name: Cow<'static, str>,
    decoder: Transform<I, O>,
    encoder: Transform<O, I>,
}

impl<I, O> Clone for Bus<I, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            decoder: Arc::clone(&self.decoder),
            encoder: Arc::clone(&self.encoder),
        }
    }
}

impl<I, O> fmt::Debug for Bus<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<I: BusValue, O: BusValue> Bus<I, O> {
    /// Creates a bus from a decoder and an encoder.
    ///
    /// Converters report failure by returning a rejection. A converter that
    /// panics is still contained: the panic is logged and turned into a leaf
    /// named after this bus, carrying the panic message.
    pub fn create<D, E>(name: impl Into<Cow<'static, str>>, decode: D, encode: E) -> Self
    where
        D: Fn(&I) -> Outcome<O> + Send + Sync + 'static,
        E: Fn(&O) -> Outcome<I> + Send + Sync + 'static,
    {
        let name = name.into();
        let (decode_name, encode_name) = (name.clone(), name.clone());

        Self::assemble(
            name,
            Arc::new(move |input: &I| guard(&decode_name, input, || decode(input))),
            Arc::new(move |output: &O| guard(&encode_name, output, || encode(output))),
        )
    }
}

impl<I, O> Bus<I, O> {
    /// Builds a bus from transforms that are already panic-free.
    pub(crate) fn assemble(
        name: impl Into<Cow<'static, str>>,
        decoder: Transform<I, O>,
        encoder: Transform<O, I>,
    ) -> Self {
        Self {
            name: name.into(),
            decoder,
            encoder,
        }
    }

    /// The display name used in error nodes.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    /// Converts an external value into an internal one.
    pub fn decode(&self, input: &I) -> Outcome<O> {
        (self.decoder)(input)
    }

    /// Converts an internal value back into its external form.
    pub fn encode(&self, output: &O) -> Outcome<I> {
        (self.encoder)(output)
    }

    pub(crate) fn decoder(&self) -> Transform<I, O> {
        Arc::clone(&self.decoder)
    }

    pub(crate) fn encoder(&self) -> Transform<O, I> {
        Arc::clone(&self.encoder)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorNode, accept, capture, reject};
    use serde_json::json;

    fn halve() -> Bus<i64, i64> {
        Bus::create(
            "halve",
            |n: &i64| {
                if n % 2 == 0 {
                    accept(n / 2)
                } else {
                    reject(ErrorNode::new("isEven", capture(n)))
                }
            },
            |n: &i64| accept(n * 2),
        )
    }

    #[test]
    fn test_decode_and_encode() {
        let bus = halve();
        assert_eq!(bus.name(), "halve");
        assert_eq!(bus.decode(&10).unwrap(), 5);
        assert_eq!(bus.encode(&5).unwrap(), 10);
    }

    #[test]
    fn test_rejection_passes_through() {
        let tree = halve().decode(&3).unwrap_err();
        assert_eq!(tree.nodes(), [ErrorNode::new("isEven", json!(3))]);
    }

    #[test]
    fn test_clone_shares_transforms() {
        let bus = halve();
        let copy = bus.clone();
        assert!(Arc::ptr_eq(&bus.decoder, &copy.decoder));
        assert_eq!(copy.decode(&8).unwrap(), 4);
    }

    #[test]
    fn test_panicking_decoder_is_contained() {
        let bus: Bus<i64, i64> = Bus::create("fragile", |_| panic!("exploded"), |n| accept(*n));
        let tree = bus.decode(&7).unwrap_err();
        let node = &tree.nodes()[0];
        assert_eq!(node.condition, "fragile");
        assert_eq!(node.value, json!(7));
        let message = node.message.as_deref().unwrap();
        assert!(message.starts_with("Unexpected panic: exploded"));
    }

    #[test]
    fn test_panicking_encoder_is_contained() {
        let bus: Bus<i64, i64> = Bus::create("fragile", |n| accept(*n), |_| panic!("nope"));
        assert!(bus.encode(&1).is_err());
        assert_eq!(bus.decode(&1).unwrap(), 1);
    }

    #[test]
    fn test_debug_shows_name() {
        assert_eq!(format!("{:?}", halve()), "Bus { name: \"halve\", .. }");
    }

    #[test]
    fn test_bus_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Bus<i64, String>>();
    }
}
