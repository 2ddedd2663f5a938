//! JSON text, typed values and object entries

use crate::bus::Bus;
use crate::combinators::bridge::{from_json, to_json};
use crate::foundation::{ErrorNode, accept, capture, reject};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Parses JSON text. Named `JSON`.
///
/// Parse and print failures are leaves carrying the serde_json message.
pub fn json() -> Bus<String, Value> {
    Bus::create(
        "JSON",
        |text: &String| {
            serde_json::from_str(text)
                .map_err(|e| ErrorNode::new("JSON", capture(text)).with_message(e.to_string()).into())
        },
        |value: &Value| {
            serde_json::to_string(value)
                .map_err(|e| ErrorNode::new("JSON", value.clone()).with_message(e.to_string()).into())
        },
    )
}

/// Reads any deserializable type out of JSON, named after the type.
///
/// ```rust
/// use iobus::presets::typed;
/// use serde_json::json;
///
/// let port = typed::<u16>();
/// assert_eq!(port.decode(&json!(8080)).unwrap(), 8080);
/// assert!(port.decode(&json!(70000)).is_err());
/// ```
pub fn typed<T>() -> Bus<Value, T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    let name: Cow<'static, str> = Cow::Borrowed(crate::foundation::value::short_type_name::<T>());
    let (decode_name, encode_name) = (name.clone(), name.clone());

    Bus::create(
        name,
        move |input: &Value| from_json::<T>(&decode_name, input),
        move |output: &T| to_json(&encode_name, output),
    )
}

/// Turns an object into `[key, value]` pairs and back. Named `objectEntries`.
pub fn object_entries() -> Bus<Value, Value> {
    Bus::create(
        "objectEntries",
        |input: &Value| match input {
            Value::Object(map) => accept(Value::Array(
                map.iter()
                    .map(|(key, value)| Value::Array(vec![Value::String(key.clone()), value.clone()]))
                    .collect(),
            )),
            other => reject(ErrorNode::new("objectEntries", other.clone())),
        },
        |output: &Value| {
            let Some(pairs) = output.as_array() else {
                return reject(ErrorNode::new("objectEntries", output.clone()));
            };

            let mut map = Map::with_capacity(pairs.len());
            for pair in pairs {
                match pair.as_array().map(Vec::as_slice) {
                    Some([Value::String(key), value]) => {
                        map.insert(key.clone(), value.clone());
                    }
                    _ => return reject(ErrorNode::new("objectEntries", output.clone())),
                }
            }
            accept(Value::Object(map))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_json_parse_and_print() {
        let bus = json();
        assert_eq!(bus.decode(&r#"{"a":[1,2]}"#.to_owned()).unwrap(), json!({ "a": [1, 2] }));
        assert_eq!(bus.encode(&json!({ "a": true })).unwrap(), r#"{"a":true}"#);
    }

    #[test]
    fn test_json_parse_failure_has_message() {
        let tree = json().decode(&"{".to_owned()).unwrap_err();
        let node = &tree.nodes()[0];
        assert_eq!(node.condition, "JSON");
        assert_eq!(node.value, json!("{"));
        assert!(node.message.as_deref().unwrap().contains("EOF"));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_typed_struct() {
        let bus = typed::<Point>();
        assert_eq!(bus.name(), "Point");
        assert_eq!(bus.decode(&json!({ "x": 1, "y": 2 })).unwrap(), Point { x: 1, y: 2 });
        assert_eq!(bus.encode(&Point { x: 3, y: 4 }).unwrap(), json!({ "x": 3, "y": 4 }));

        let tree = bus.decode(&json!({ "x": 1 })).unwrap_err();
        assert!(tree.nodes()[0].message.as_deref().unwrap().contains("missing field `y`"));
    }

    #[test]
    fn test_object_entries() {
        let bus = object_entries();
        let entries = bus.decode(&json!({ "b": 1, "a": 2 })).unwrap();
        assert_eq!(entries, json!([["b", 1], ["a", 2]]));
        assert_eq!(bus.encode(&entries).unwrap(), json!({ "b": 1, "a": 2 }));
        assert!(bus.decode(&json!([1])).is_err());
        assert!(bus.encode(&json!([[1, 2]])).is_err());
    }
}
