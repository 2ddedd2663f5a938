//! Nullable values

use crate::bus::Bus;
use crate::foundation::{BusValue, ErrorNode, accept, capture};
use serde_json::Value;

/// Decodes `null` to `None` and anything else through `inner`.
/// Named `Optional(inner)`.
///
/// The inner bus never sees `null`. Its failures are wrapped in one node
/// named after the optional bus.
///
/// ```rust
/// use iobus::prelude::*;
/// use serde_json::json;
///
/// let maybe = optional(&number());
/// assert_eq!(maybe.decode(&json!(null)).unwrap(), None);
/// assert_eq!(maybe.decode(&json!(2)).unwrap(), Some(json!(2)));
/// assert!(maybe.decode(&json!("x")).is_err());
/// ```
pub fn optional<O: BusValue>(inner: &Bus<Value, O>) -> Bus<Value, Option<O>> {
    let name = format!("Optional({})", inner.name());
    let (decode_name, encode_name) = (name.clone(), name.clone());
    let (decoder, encoder) = (inner.clone(), inner.clone());

    Bus::create(
        name,
        move |input: &Value| {
            if input.is_null() {
                return accept(None);
            }
            decoder.decode(input).map(Some).map_err(|failure| {
                ErrorNode::new(decode_name.clone(), input.clone())
                    .with_branches(failure)
                    .into()
            })
        },
        move |output: &Option<O>| {
            let Some(inner) = output else {
                return accept(Value::Null);
            };
            encoder.encode(inner).map_err(|failure| {
                ErrorNode::new(encode_name.clone(), capture(output))
                    .with_branches(failure)
                    .into()
            })
        },
    )
}
