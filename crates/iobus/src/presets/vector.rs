//! Arrays of a single element type

use crate::bus::Bus;
use crate::foundation::{BusValue, ErrorNode, ErrorTree, capture, collect_all, reject};
use serde_json::Value;

/// Index node `[i]` wrapping the failure of one element.
pub(crate) fn index_node(index: usize, value: Value, failure: ErrorTree) -> ErrorNode {
    ErrorNode::new(format!("[{index}]"), value).with_branches(failure)
}

/// Decodes every element of a JSON array with `inner`. Named `Vector(inner)`.
///
/// All elements are decoded; each failing element is reported as `[i]`, in
/// index order.
///
/// ```rust
/// use iobus::prelude::*;
/// use serde_json::json;
///
/// let numbers = vector(&number());
/// let tree = numbers.decode(&json!([1, 2, "3"])).unwrap_err();
///
/// let branches = &tree.nodes()[0].branches;
/// assert_eq!(branches.len(), 1);
/// assert_eq!(branches[0].condition, "[2]");
/// ```
pub fn vector<O: BusValue>(inner: &Bus<Value, O>) -> Bus<Value, Vec<O>> {
    let name = format!("Vector({})", inner.name());
    let (decode_name, encode_name) = (name.clone(), name.clone());
    let (decoder, encoder) = (inner.clone(), inner.clone());

    Bus::create(
        name,
        move |input: &Value| {
            let Some(elements) = input.as_array() else {
                return reject(ErrorNode::new(decode_name.clone(), input.clone()));
            };

            collect_all(elements.iter().map(|element| decoder.decode(element)), |index, failure| {
                index_node(index, elements[index].clone(), failure)
            })
            .map_err(|failures| {
                ErrorNode::new(decode_name.clone(), input.clone())
                    .with_branches(failures)
                    .into()
            })
        },
        move |output: &Vec<O>| {
            collect_all(output.iter().map(|element| encoder.encode(element)), |index, failure| {
                index_node(index, capture(&output[index]), failure)
            })
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
    use crate::presets::{number, string};
    use serde_json::json;

    #[test]
    fn test_empty_array_succeeds() {
        assert_eq!(vector(&number()).decode(&json!([])).unwrap(), Vec::<Value>::new());
    }

    #[test]
    fn test_non_array_is_leaf() {
        let tree = vector(&number()).decode(&json!({ "0": 1 })).unwrap_err();
        let node = &tree.nodes()[0];
        assert_eq!(node.condition, "Vector(isNumber(any))");
        assert!(node.is_leaf());
    }

    #[test]
    fn test_every_failing_index_is_reported() {
        let tree = vector(&string()).decode(&json!(["a", 1, "b", false])).unwrap_err();
        let node = &tree.nodes()[0];
        assert_eq!(node.value, json!(["a", 1, "b", false]));

        let indices: Vec<_> = node.branches.iter().map(|n| &*n.condition).collect();
        assert_eq!(indices, ["[1]", "[3]"]);
        assert_eq!(node.branches[0].value, json!(1));
        assert_eq!(node.branches[0].branches[0].condition, "isString(any)");
    }

    #[test]
    fn test_nested_vectors() {
        let matrix = vector(&vector(&number()));
        assert_eq!(matrix.name(), "Vector(Vector(isNumber(any)))");

        let decoded = matrix.decode(&json!([[1], [2, 3]])).unwrap();
        assert_eq!(decoded, vec![vec![json!(1)], vec![json!(2), json!(3)]]);
        assert_eq!(matrix.encode(&decoded).unwrap(), json!([[1], [2, 3]]));
    }

    #[test]
    fn test_encode_failure_uses_same_shape() {
        let tree = vector(&number())
            .encode(&vec![json!(1), json!("x")])
            .unwrap_err();
        let node = &tree.nodes()[0];
        assert_eq!(node.branches.len(), 1);
        assert_eq!(node.branches[0].condition, "[1]");
        assert_eq!(node.branches[0].value, json!("x"));
    }
}
