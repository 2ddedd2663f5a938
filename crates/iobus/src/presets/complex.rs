//! Objects with a fixed set of named fields
//!
//! A [`Complex`] is a statically declared table of `key → bus`. Decoding
//! runs every field bus on the matching property of a JSON object, in
//! declaration order, and succeeds only if all of them succeed. Each failing
//! field is reported as a node named after its key:
//!
//! ```text
//! Cat
//!   ├─ name
//!   │   └─ isString(any)
//!   │       └─ isString rejected `4`
//!   └─ age
//!       └─ isPositive(isValidNumber(isNumber(any)))
//!           └─ isPositive rejected `-1`
//! ```
//!
//! Missing properties are decoded as `null`, so [`optional`] fields may be
//! left out. Properties that are not declared are dropped from the output.
//!
//! [`optional`]: crate::presets::optional

use crate::bus::Bus;
use crate::foundation::{BusValue, ErrorNode, ErrorTree, Outcome, reject};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

type Fields = IndexMap<Cow<'static, str>, Bus<Value, Value>>;

// ============================================================================
// FIELD CONVERSION
// ============================================================================

/// Anything that can be declared as a field of a [`Complex`].
///
/// Implemented for every bus from JSON to a serde-convertible type, and for
/// [`Complex`] itself so objects can nest.
pub trait AsField {
    /// The field bus, with its output bridged to JSON.
    fn as_field(&self) -> Bus<Value, Value>;
}

impl<O> AsField for Bus<Value, O>
where
    O: BusValue + DeserializeOwned,
{
    fn as_field(&self) -> Bus<Value, Value> {
        self.into_value()
    }
}

impl AsField for Complex {
    fn as_field(&self) -> Bus<Value, Value> {
        self.bus.clone()
    }
}

// ============================================================================
// COMPLEX
// ============================================================================

/// An object preset. Dereferences to its `Bus<Value, Value>`.
///
/// # Examples
///
/// ```rust
/// use iobus::prelude::*;
/// use serde_json::json;
///
/// let cat = Complex::builder("Cat")
///     .field("name", &string())
///     .field("age", &positive_number())
///     .build();
///
/// let decoded = cat.decode(&json!({ "name": "Tom", "age": 3, "owner": "Jerry" })).unwrap();
/// assert_eq!(decoded, json!({ "name": "Tom", "age": 3 }));
///
/// let tree = cat.decode(&json!({ "name": 4, "age": -1 })).unwrap_err();
/// let keys: Vec<_> = tree.nodes()[0].branches.iter().map(|n| &*n.condition).collect();
/// assert_eq!(keys, ["name", "age"]);
/// ```
#[derive(Clone)]
pub struct Complex {
    bus: Bus<Value, Value>,
    fields: Arc<Fields>,
}

impl std::fmt::Debug for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Complex")
            .field("name", &self.bus.name())
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Complex {
    /// Starts declaring an object preset named `name`.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> ComplexBuilder {
        ComplexBuilder {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Field keys and their buses, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Bus<Value, Value>)> {
        self.fields.iter().map(|(key, bus)| (&**key, bus))
    }

    /// The bus declared for `key`.
    pub fn field(&self, key: &str) -> Option<&Bus<Value, Value>> {
        self.fields.get(key)
    }

    /// The underlying bus.
    pub fn bus(&self) -> &Bus<Value, Value> {
        &self.bus
    }

    /// A preset restricted to `keys`, reusing their buses as they are.
    /// Named `Partial(Name[k1, k2])`.
    ///
    /// Keys that are not declared on this object are skipped with a warning.
    pub fn partial(&self, keys: &[&str]) -> Complex {
        let kept = self.kept_keys(keys);
        let name = format!("Partial({}[{}])", self.bus.name(), kept.join(", "));
        self.restrict(&kept, name)
    }

    /// Like [`partial`](Self::partial) with an explicit name.
    pub fn partial_named(&self, keys: &[&str], name: impl Into<Cow<'static, str>>) -> Complex {
        let kept = self.kept_keys(keys);
        self.restrict(&kept, name.into())
    }

    fn kept_keys<'a>(&self, keys: &[&'a str]) -> Vec<&'a str> {
        keys.iter()
            .copied()
            .filter(|key| {
                let known = self.fields.contains_key(*key);
                if !known {
                    tracing::warn!(object = %self.bus.name(), key, "unknown field in partial, skipping");
                }
                known
            })
            .collect()
    }

    fn restrict(&self, keys: &[&str], name: impl Into<Cow<'static, str>>) -> Complex {
        let fields = keys
            .iter()
            .filter_map(|key| self.fields.get_key_value(*key))
            .map(|(key, bus)| (key.clone(), bus.clone()))
            .collect();
        build(name.into(), fields)
    }
}

impl Deref for Complex {
    type Target = Bus<Value, Value>;

    fn deref(&self) -> &Self::Target {
        &self.bus
    }
}

impl From<Complex> for Bus<Value, Value> {
    fn from(complex: Complex) -> Self {
        complex.bus
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Declares the fields of a [`Complex`]. Created by [`Complex::builder`].
#[derive(Debug, Clone)]
#[must_use = "builder does nothing until .build() is called"]
pub struct ComplexBuilder {
    name: Cow<'static, str>,
    fields: Fields,
}

impl ComplexBuilder {
    /// Declares `key`, decoded with `bus`.
    ///
    /// Declaring the same key twice replaces the bus but keeps the first
    /// position.
    pub fn field(mut self, key: impl Into<Cow<'static, str>>, bus: &impl AsField) -> Self {
        self.fields.insert(key.into(), bus.as_field());
        self
    }

    /// Finishes the declaration.
    pub fn build(self) -> Complex {
        build(self.name, self.fields)
    }
}

// ============================================================================
// DECODE / ENCODE
// ============================================================================

/// Runs `step` for every declared field of `input`, reporting failures per key.
fn each_field(
    name: &Cow<'static, str>,
    fields: &Fields,
    input: &Value,
    step: impl Fn(&Bus<Value, Value>, &Value) -> Outcome<Value>,
) -> Outcome<Value> {
    let Some(object) = input.as_object() else {
        return reject(ErrorNode::new(name.clone(), input.clone()));
    };

    let mut output = Map::with_capacity(fields.len());
    let mut failures = ErrorTree::new();

    for (key, bus) in fields {
        let raw = object.get(&**key).unwrap_or(&Value::Null);
        match step(bus, raw) {
            Ok(value) => {
                output.insert(key.to_string(), value);
            }
            Err(failure) => failures.push(ErrorNode::new(key.clone(), raw.clone()).with_branches(failure)),
        }
    }

    if failures.is_empty() {
        Ok(Value::Object(output))
    } else {
        tracing::trace!(object = %name, failed = failures.len(), "object rejected");
        reject(ErrorNode::new(name.clone(), input.clone()).with_branches(failures))
    }
}

fn build(name: Cow<'static, str>, fields: Fields) -> Complex {
    let fields = Arc::new(fields);
    let (decode_fields, encode_fields) = (Arc::clone(&fields), Arc::clone(&fields));
    let (decode_name, encode_name) = (name.clone(), name.clone());

    let bus = Bus::create(
        name,
        move |input: &Value| each_field(&decode_name, &decode_fields, input, |bus, raw| bus.decode(raw)),
        move |output: &Value| each_field(&encode_name, &encode_fields, output, |bus, raw| bus.encode(raw)),
    );

    Complex { bus, fields }
}
