//! Fixed-position arrays

use crate::bus::Bus;
use crate::foundation::{BusValue, ErrorNode, capture, collect_all, reject};
use crate::presets::vector::index_node;
use serde_json::Value;

/// Decodes position `i` of a JSON array with `inners[i]`.
/// Named `Tuple(a, b, ...)`.
///
/// Positions are paired up to the shorter of the two lengths; extra
/// elements and missing positions are ignored. Buses with different output
/// types can be mixed by bridging them with
/// [`into_value`](crate::bus::Bus::into_value).
///
/// ```rust
/// use iobus::prelude::*;
/// use serde_json::json;
///
/// let point = tuple(&[number(), string()]);
/// assert_eq!(point.name(), "Tuple(isNumber(any), isString(any))");
/// assert_eq!(point.decode(&json!([1, "a"])).unwrap(), vec![json!(1), json!("a")]);
/// ```
pub fn tuple<O: BusValue>(inners: &[Bus<Value, O>]) -> Bus<Value, Vec<O>> {
    let names: Vec<&str> = inners.iter().map(Bus::name).collect();
    let name = format!("Tuple({})", names.join(", "));
    let (decode_name, encode_name) = (name.clone(), name.clone());
    let (decoders, encoders) = (inners.to_vec(), inners.to_vec());

    Bus::create(
        name,
        move |input: &Value| {
            let Some(elements) = input.as_array() else {
                return reject(ErrorNode::new(decode_name.clone(), input.clone()));
            };

            let outcomes = decoders.iter().zip(elements).map(|(bus, element)| bus.decode(element));
            collect_all(outcomes, |index, failure| index_node(index, elements[index].clone(), failure))
                .map_err(|failures| {
                    ErrorNode::new(decode_name.clone(), input.clone())
                        .with_branches(failures)
                        .into()
                })
        },
        move |output: &Vec<O>| {
            let outcomes = encoders.iter().zip(output).map(|(bus, element)| bus.encode(element));
            collect_all(outcomes, |index, failure| index_node(index, capture(&output[index]), failure))
                .map(Value::Array)
                .map_err(|failures| {
                    ErrorNode::new(encode_name.clone(), capture(output))
                        .with_branches(failures)
                        .into()
                })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{boolean, number, string};
    use serde_json::json;

    #[test]
    fn test_failing_positions() {
        let bus = tuple(&[number(), string(), boolean()]);
        let tree = bus.decode(&json!(["1", "two", 3])).unwrap_err();
        let node = &tree.nodes()[0];
        assert_eq!(node.condition, "Tuple(isNumber(any), isString(any), isBoolean(any))");

        let positions: Vec<_> = node.branches.iter().map(|n| &*n.condition).collect();
        assert_eq!(positions, ["[0]", "[2]"]);
        assert_eq!(node.branches[1].value, json!(3));
    }

    #[test]
    fn test_unmatched_positions_are_ignored() {
        let bus = tuple(&[number(), number()]);
        assert_eq!(bus.decode(&json!([1, 2, "extra"])).unwrap(), vec![json!(1), json!(2)]);
        assert_eq!(bus.decode(&json!([1])).unwrap(), vec![json!(1)]);
    }

    #[test]
    fn test_non_array_is_leaf() {
        let tree = tuple(&[number()]).decode(&json!("x")).unwrap_err();
        assert!(tree.nodes()[0].is_leaf());
    }

    #[test]
    fn test_encode_roundtrip() {
        let bus = tuple(&[string(), number()]);
        let decoded = bus.decode(&json!(["a", 1])).unwrap();
        assert_eq!(bus.encode(&decoded).unwrap(), json!(["a", 1]));
    }
}
