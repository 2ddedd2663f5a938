//! Type-check presets over JSON values
//!
//! Each preset is [`any`] gated by a type check, so the check names show up
//! in both the bus name (`isNumber(any)`) and the rejection leaf
//! (`isNumber rejected "1"`).

use crate::bus::Bus;
use crate::condition::Condition;
use crate::foundation::accept;
use serde_json::Value;

/// Accepts every value unchanged. Named `any`.
pub fn any() -> Bus<Value, Value> {
    Bus::create("any", |input: &Value| accept(input.clone()), |output: &Value| accept(output.clone()))
}

/// Accepts JSON strings. Named `isString(any)`.
pub fn string() -> Bus<Value, Value> {
    any().ensure("isString", Value::is_string)
}

/// Accepts JSON numbers. Named `isNumber(any)`.
pub fn number() -> Bus<Value, Value> {
    any().ensure("isNumber", Value::is_number)
}

/// Accepts JSON booleans. Named `isBoolean(any)`.
pub fn boolean() -> Bus<Value, Value> {
    any().ensure("isBoolean", Value::is_boolean)
}

/// Numbers that are finite and not NaN. Named `isValidNumber(isNumber(any))`.
pub fn valid_number() -> Bus<Value, Value> {
    let finite = Condition::new("isFinite", |v: &Value| v.as_f64().is_some_and(f64::is_finite));
    let nan = Condition::new("isNaN", |v: &Value| v.as_f64().is_some_and(f64::is_nan));

    number().gate("isValidNumber", &finite.and(&nan.not()))
}

/// Valid numbers strictly greater than zero.
/// Named `isPositive(isValidNumber(isNumber(any)))`.
pub fn positive_number() -> Bus<Value, Value> {
    valid_number().ensure("isPositive", |v: &Value| v.as_f64().is_some_and(|n| n > 0.0))
}
