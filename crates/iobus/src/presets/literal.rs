//! Fixed values

use crate::bus::Bus;
use crate::presets::any;
use serde_json::Value;

/// Accepts only values equal to `expected`. Named `Literal(<expected>)(any)`.
///
/// ```rust
/// use iobus::presets::literal;
/// use serde_json::json;
///
/// let cat = literal(json!("cat"));
/// assert_eq!(cat.name(), "Literal(cat)(any)");
/// assert!(cat.decode(&json!("cat")).is_ok());
/// assert!(cat.decode(&json!("dog")).is_err());
/// ```
pub fn literal(expected: Value) -> Bus<Value, Value> {
    literal_with(expected, |left, right| left == right)
}

/// Like [`literal`], comparing with `eq` instead of JSON equality.
///
/// An `eq` that panics counts as "not equal".
pub fn literal_with<F>(expected: Value, eq: F) -> Bus<Value, Value>
where
    F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
{
    let name = format!("Literal({})", render(&expected));

    any().ensure(&name, move |candidate: &Value| eq(candidate, &expected))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_shape() {
        let tree = literal(json!(3)).decode(&json!(4)).unwrap_err();
        let node = &tree.nodes()[0];
        assert_eq!(node.condition, "Literal(3)(any)");
        assert_eq!(node.branches[0].condition, "Literal(3)");
        assert_eq!(node.branches[0].value, json!(4));
    }

    #[test]
    fn test_structural_equality() {
        let bus = literal(json!({ "kind": "cat" }));
        assert!(bus.decode(&json!({ "kind": "cat" })).is_ok());
        assert!(bus.encode(&json!({ "kind": "dog" })).is_err());
    }

    #[test]
    fn test_custom_equality() {
        let bus = literal_with(json!("CAT"), |candidate, expected| {
            candidate
                .as_str()
                .zip(expected.as_str())
                .is_some_and(|(a, b)| a.eq_ignore_ascii_case(b))
        });
        assert!(bus.decode(&json!("cat")).is_ok());
        assert!(bus.decode(&json!(1)).is_err());
    }

    #[test]
    fn test_panicking_equality_is_not_equal() {
        let bus = literal_with(json!(1), |_, _| panic!("broken equality"));
        let tree = bus.decode(&json!(1)).unwrap_err();
        let leaf = &tree.nodes()[0].branches[0];
        assert!(leaf.message.as_deref().unwrap().contains("broken equality"));
    }
}
