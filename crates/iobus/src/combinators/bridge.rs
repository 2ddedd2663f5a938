//! Bridging typed buses into the JSON domain
//!
//! Structural presets hold their parts as `Bus<Value, Value>`. A field bus
//! with a typed output, such as `date()` or `vector(number())`, is bridged
//! with [`Bus::into_value`], which serializes on decode and deserializes on
//! encode while keeping the bus name and the inner error shapes.

use crate::bus::Bus;
use crate::foundation::value::{ConvertError, short_type_name};
use crate::foundation::{BusValue, Outcome};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

/// Serializes `value`, reporting failure as a leaf named `name`.
pub(crate) fn to_json<T: Serialize>(name: &Cow<'static, str>, value: &T) -> Outcome<Value> {
    serde_json::to_value(value).map_err(|source| {
        ConvertError::Serialize {
            type_name: short_type_name::<T>(),
            source,
        }
        .into_node(name.clone(), Value::Null)
        .into()
    })
}

/// Deserializes `value`, reporting failure as a leaf named `name`.
pub(crate) fn from_json<T: DeserializeOwned>(name: &Cow<'static, str>, value: &Value) -> Outcome<T> {
    T::deserialize(value).map_err(|source| {
        ConvertError::Deserialize {
            type_name: short_type_name::<T>(),
            source,
        }
        .into_node(name.clone(), value.clone())
        .into()
    })
}

impl<I: BusValue, O: BusValue + DeserializeOwned> Bus<I, O> {
    /// Exposes the output of this bus as JSON.
    ///
    /// ```rust
    /// use iobus::prelude::*;
    /// use serde_json::json;
    ///
    /// let bus = vector(&number()).into_value();
    /// assert_eq!(bus.name(), "Vector(isNumber(any))");
    /// assert_eq!(bus.decode(&json!([1, 2])).unwrap(), json!([1, 2]));
    /// ```
    #[must_use = "combinators return a new bus"]
    pub fn into_value(&self) -> Bus<I, Value> {
        let name = self.shared_name();

        let decoder = {
            let (name, inner) = (name.clone(), self.decoder());
            Arc::new(move |input: &I| to_json(&name, &inner(input)?))
        };
        let encoder = {
            let (name, inner) = (name.clone(), self.encoder());
            Arc::new(move |output: &Value| inner(&from_json::<O>(&name, output)?))
        };

        Bus::assemble(name, decoder, encoder)
    }
}
