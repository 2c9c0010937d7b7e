//! Coerce arbitrary JSON values into canonical LogEvent records.

use serde_json::Value;

use crate::types::LogEvent;

/// Total coercion: never fails, every value becomes a LogEvent.
///
/// Structured records keep their fields (with defaults for anything
/// missing); any other value becomes a message-only event with no
/// timestamp so the aggregation scan never sees malformed input.
pub fn event(value: &Value) -> LogEvent {
  match value {
    Value::Object(map) => LogEvent {
      timestamp: map.get("timestamp").and_then(timestamp_string),
      message: map
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string(),
      level: map
        .get("level")
        .and_then(Value::as_str)
        .unwrap_or("INFO")
        .to_string(),
    },
    other => LogEvent {
      timestamp: None,
      message: value_repr(other),
      level: "INFO".to_string(),
    },
  }
}

/// Timestamp fields may arrive as strings or as epoch numbers; both are
/// kept as strings for the minute-bucket prefix. Null means absent.
fn timestamp_string(v: &Value) -> Option<String> {
  match v {
    Value::Null => None,
    Value::String(s) => Some(s.clone()),
    other => Some(other.to_string()),
  }
}

fn value_repr(v: &Value) -> String {
  match v {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}
