//! Values flowing through buses, and the panic boundary
//!
//! Error nodes record the rejected value as JSON, so every type that flows
//! through a bus must be serializable. [`BusValue`] names that bound.

use crate::foundation::error::{ErrorNode, Outcome};
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};

/// A type that can flow through a bus and be captured into an error node.
///
/// Implemented for every `Serialize + 'static` type.
pub trait BusValue: Serialize + 'static {}

impl<T: Serialize + 'static> BusValue for T {}

/// Captures `value` for an [`ErrorNode`].
///
/// Values that have no JSON representation (for example maps with
/// composite keys) are captured as `null`.
pub fn capture<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|error| {
        tracing::trace!(%error, "value has no JSON representation, capturing null");
        Value::Null
    })
}

/// Failures of the serde bridges between typed values and JSON.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConvertError {
    #[error("cannot represent `{type_name}` as JSON: {source}")]
    Serialize {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read `{type_name}` from JSON: {source}")]
    Deserialize {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    /// Leaf node for this failure, rejecting `value` under `condition`.
    pub(crate) fn into_node(self, condition: Cow<'static, str>, value: Value) -> ErrorNode {
        ErrorNode::new(condition, value).with_message(self.to_string())
    }
}

/// Last path segment of a type name, generics included.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Cow<'static, str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Cow::Borrowed(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Cow::Owned(message.clone())
    } else {
        Cow::Borrowed("non-string panic payload")
    }
}

/// Runs `f`, turning a panic into a rejection leaf named `name`.
pub(crate) fn guard<A, B>(
    name: &Cow<'static, str>,
    input: &A,
    f: impl FnOnce() -> Outcome<B>,
) -> Outcome<B>
where
    A: Serialize + ?Sized,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let message = panic_message(&*payload);
            tracing::warn!(bus = %name, %message, "converter panicked, rejecting input");
            Err(ErrorNode::new(name.clone(), capture(input))
                .with_message(format!(
                    "Unexpected panic: {message}\n---\nConverters should return a rejection instead of panicking"
                ))
                .into())
        }
    }
}

/// Runs a boolean test, reporting a panic as `Err(message)`.
pub(crate) fn guard_test(name: &str, f: impl FnOnce() -> bool) -> Result<bool, Cow<'static, str>> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(&*payload);
        tracing::warn!(condition = %name, %message, "predicate panicked, treating as failed");
        message
    })
}
