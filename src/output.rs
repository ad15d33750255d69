//! Output formatting and control utilities.
//!
//! CHANGELOG:
//! - 10/19/2026 - Dropped text truncation, fields filter applies per match
//! - 10/19/2026 - Initial implementation

use serde::Serialize;
use serde_json::{json, Value};

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
    pub fields: Option<String>,
}

impl OutputControls {
    /// Emit data according to output controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(json!(null));

        let filtered = match self.fields {
            Some(ref fields) => filter_fields(&value, fields),
            None => value,
        };

        if self.compact {
            serde_json::to_string(&filtered).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string_pretty(&filtered).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }
}

/// Filter JSON value to only include specified fields.
///
/// Top-level keys are kept when listed. A nested array of objects (such as
/// `matches`) that is kept is filtered the same way, so
/// `matched,matches,list_name,similarity` trims each match too.
fn filter_fields(value: &Value, fields: &str) -> Value {
    let field_list: Vec<&str> = fields.split(',').map(|s| s.trim()).collect();

    match value {
        Value::Array(arr) => Value::Array(arr.iter().map(|v| filter_fields(v, fields)).collect()),
        Value::Object(map) => {
            let mut filtered = serde_json::Map::new();
            for field in &field_list {
                if let Some(v) = map.get(*field) {
                    let v = match v {
                        Value::Array(_) => filter_nested(v, fields),
                        _ => v.clone(),
                    };
                    filtered.insert(field.to_string(), v);
                }
            }
            Value::Object(filtered)
        }
        _ => value.clone(),
    }
}

/// Filter objects inside an array, leaving scalar arrays untouched.
fn filter_nested(value: &Value, fields: &str) -> Value {
    match value {
        Value::Array(arr) if arr.iter().any(Value::is_object) => filter_fields(value, fields),
        _ => value.clone(),
    }
}

/// Format error as JSON.
pub fn format_error(error: &str) -> String {
    serde_json::to_string(&json!({
        "error": error,
        "success": false
    }))
    .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, error))
}
