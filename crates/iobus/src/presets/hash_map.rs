//! Maps encoded as arrays of `[key, value]` pairs
//!
//! JSON object keys are always strings, so maps with arbitrary key types
//! travel as pair lists: `[[1, "one"], [2, "two"]]`. The decoded map keeps
//! pair order; a repeated key keeps the last value.

use crate::bus::Bus;
use crate::foundation::{BusValue, ErrorNode, ErrorTree, Outcome, accept, capture, collect_all, reject};
use crate::presets::vector::index_node;
use indexmap::IndexMap;
use serde_json::Value;
use std::hash::Hash;

/// Runs `key` and `value` on one pair, keeping the failures of both.
fn both<K, V>(key: Outcome<K>, value: Outcome<V>) -> Outcome<(K, V)> {
    match (key, value) {
        (Ok(key), Ok(value)) => accept((key, value)),
        (key, value) => Err(key
            .err()
            .unwrap_or_default()
            .concat(value.err().unwrap_or_default())),
    }
}

/// Decodes a list of `[key, value]` pairs into an [`IndexMap`].
/// Named `HashMap(key, value)`.
///
/// A failing pair is reported as `[i]` with the key failures followed by
/// the value failures. An element that is not a two-element array is
/// reported as a bare `[i]` leaf.
///
/// ```rust
/// use iobus::prelude::*;
/// use serde_json::json;
///
/// let scores = hash_map(&string(), &number());
/// let decoded = scores.decode(&json!([["ann", 3], ["bob", 5]])).unwrap();
/// assert_eq!(decoded[&json!("bob")], json!(5));
/// ```
pub fn hash_map<K, V>(key: &Bus<Value, K>, value: &Bus<Value, V>) -> Bus<Value, IndexMap<K, V>>
where
    K: BusValue + Eq + Hash,
    V: BusValue,
{
    let name = format!("HashMap({}, {})", key.name(), value.name());
    let (decode_name, encode_name) = (name.clone(), name.clone());
    let (key_decoder, value_decoder) = (key.clone(), value.clone());
    let (key_encoder, value_encoder) = (key.clone(), value.clone());

    Bus::create(
        name,
        move |input: &Value| {
            let Some(pairs) = input.as_array() else {
                return reject(ErrorNode::new(decode_name.clone(), input.clone()));
            };

            let outcomes = pairs.iter().map(|pair| match pair.as_array().map(Vec::as_slice) {
                Some([k, v]) => both(key_decoder.decode(k), value_decoder.decode(v)),
                _ => Err(ErrorTree::new()),
            });

            collect_all(outcomes, |index, failure| index_node(index, pairs[index].clone(), failure))
                .map(|entries| entries.into_iter().collect())
                .map_err(|failures| {
                    ErrorNode::new(decode_name.clone(), input.clone())
                        .with_branches(failures)
                        .into()
                })
        },
        move |output: &IndexMap<K, V>| {
            let outcomes = output
                .iter()
                .map(|(k, v)| both(key_encoder.encode(k), value_encoder.encode(v)));

            collect_all(outcomes, |index, failure| {
                let pair = output
                    .get_index(index)
                    .map_or(Value::Null, |(k, v)| Value::Array(vec![capture(k), capture(v)]));
                index_node(index, pair, failure)
            })
            .map(|entries| {
                Value::Array(
                    entries
                        .into_iter()
                        .map(|(k, v)| Value::Array(vec![k, v]))
                        .collect(),
                )
            })
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
    use crate::presets::{number, string, typed};
    use serde_json::json;

    #[test]
    fn test_name() {
        assert_eq!(
            hash_map(&string(), &number()).name(),
            "HashMap(isString(any), isNumber(any))"
        );
    }

    #[test]
    fn test_typed_keys_keep_order() {
        let bus = hash_map(&typed::<u8>(), &string());
        let decoded = bus.decode(&json!([[2, "two"], [1, "one"]])).unwrap();
        assert_eq!(decoded.keys().copied().collect::<Vec<_>>(), [2, 1]);
        assert_eq!(bus.encode(&decoded).unwrap(), json!([[2, "two"], [1, "one"]]));
    }

    #[test]
    fn test_last_write_wins() {
        let bus = hash_map(&string(), &number());
        let decoded = bus.decode(&json!([["a", 1], ["a", 2]])).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[&json!("a")], json!(2));
    }

    #[test]
    fn test_pair_failure_lists_key_then_value() {
        let bus = hash_map(&string(), &number());
        let tree = bus.decode(&json!([["ok", 1], [5, "x"]])).unwrap_err();
        let node = &tree.nodes()[0];
        assert_eq!(node.branches.len(), 1);

        let pair = &node.branches[0];
        assert_eq!(pair.condition, "[1]");
        assert_eq!(pair.value, json!([5, "x"]));

        let reasons: Vec<_> = pair.branches.iter().map(|n| &*n.condition).collect();
        assert_eq!(reasons, ["isString(any)", "isNumber(any)"]);
    }

    #[test]
    fn test_malformed_pair_is_leaf() {
        let bus = hash_map(&string(), &number());
        let tree = bus.decode(&json!([["a", 1], ["b"], 3])).unwrap_err();
        let node = &tree.nodes()[0];

        let indices: Vec<_> = node.branches.iter().map(|n| &*n.condition).collect();
        assert_eq!(indices, ["[1]", "[2]"]);
        assert!(node.branches.iter().all(ErrorNode::is_leaf));
    }

    #[test]
    fn test_non_array_is_leaf() {
        let tree = hash_map(&string(), &number()).decode(&json!({ "a": 1 })).unwrap_err();
        assert!(tree.nodes()[0].is_leaf());
    }
}
