//! Timestamps
//!
//! [`date`] accepts RFC 3339 strings and millisecond Unix timestamps, and
//! always encodes back to RFC 3339 in UTC with millisecond precision, e.g.
//! `2024-02-29T12:00:00.000Z`.

use crate::bus::Bus;
use crate::foundation::{ErrorNode, Outcome, accept, reject};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

fn parse(input: &Value) -> Option<DateTime<Utc>> {
    match input {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|date| date.with_timezone(&Utc)),
        Value::Number(millis) => millis
            .as_i64()
            // whole milliseconds only; fractional values are truncated
            .or_else(|| millis.as_f64().filter(|n| n.is_finite()).map(|n| n as i64))
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// Dates as RFC 3339 text or epoch milliseconds. Named `date`.
///
/// ```rust
/// use iobus::presets::date;
/// use serde_json::json;
///
/// let bus = date();
/// let parsed = bus.decode(&json!(0)).unwrap();
/// assert_eq!(bus.encode(&parsed).unwrap(), json!("1970-01-01T00:00:00.000Z"));
/// ```
pub fn date() -> Bus<Value, DateTime<Utc>> {
    Bus::create(
        "date",
        |input: &Value| -> Outcome<DateTime<Utc>> {
            match parse(input) {
                Some(date) => accept(date),
                None => reject(ErrorNode::new("date", input.clone())),
            }
        },
        |output: &DateTime<Utc>| accept(Value::String(output.to_rfc3339_opts(SecondsFormat::Millis, true))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_rfc3339_with_offset_normalizes_to_utc() {
        let parsed = date().decode(&json!("2024-02-29T14:00:00+02:00")).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap());
        assert_eq!(date().encode(&parsed).unwrap(), json!("2024-02-29T12:00:00.000Z"));
    }

    #[test]
    fn test_epoch_millis() {
        let parsed = date().decode(&json!(1_500)).unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_500);
    }

    #[test]
    fn test_rejects_garbage() {
        for input in [json!("yesterday"), json!(true), json!(null), json!({})] {
            let tree = date().decode(&input).unwrap_err();
            assert_eq!(tree.nodes(), [ErrorNode::new("date", input)]);
        }
    }
}
