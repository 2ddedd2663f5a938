//! Serialized error trees, the shape consumed outside the crate.

use iobus::prelude::*;
use serde_json::json;

fn cat() -> Complex {
    Complex::builder("Cat")
        .field("name", &string())
        .field("age", &positive_number())
        .build()
}

#[test]
fn complex_failure_serializes_as_nested_nodes() {
    let errors = cat().decode(&json!({ "name": 4, "age": -1 })).unwrap_err();

    insta::assert_json_snapshot!(errors, @r#"
    [
      {
        "condition": "Cat",
        "value": {
          "name": 4,
          "age": -1
        },
        "branches": [
          {
            "condition": "name",
            "value": 4,
            "branches": [
              {
                "condition": "isString(any)",
                "value": 4,
                "branches": [
                  {
                    "condition": "isString",
                    "value": 4
                  }
                ]
              }
            ]
          },
          {
            "condition": "age",
            "value": -1,
            "branches": [
              {
                "condition": "isPositive(isValidNumber(isNumber(any)))",
                "value": -1,
                "branches": [
                  {
                    "condition": "isPositive",
                    "value": -1
                  }
                ]
              }
            ]
          }
        ]
      }
    ]
    "#);
}

#[test]
fn parse_failure_carries_message() {
    let errors = json().decode(&"[1,".to_owned()).unwrap_err();

    insta::assert_json_snapshot!(errors, {
        "[0].message" => "[serde_json message]",
    }, @r#"
    [
      {
        "condition": "JSON",
        "value": "[1,",
        "message": "[serde_json message]"
      }
    ]
    "#);
}

#[test]
fn error_tree_deserializes_from_json() {
    let wire = json!([
        {
            "condition": "Cat",
            "value": { "name": 4 },
            "branches": [{ "condition": "name", "value": 4 }]
        }
    ]);

    let tree: ErrorTree = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(tree.total_count(), 2);
    assert_eq!(tree.nodes()[0].branches[0].condition, "name");
    assert_eq!(serde_json::to_value(&tree).unwrap(), wire);
}

#[test]
fn error_tree_is_a_std_error() {
    fn describe(error: &dyn std::error::Error) -> String {
        error.to_string()
    }

    let errors = number().decode(&json!("1")).unwrap_err();
    assert_eq!(describe(&errors), "isNumber(any)\n  └─ isNumber rejected `1`");
}
