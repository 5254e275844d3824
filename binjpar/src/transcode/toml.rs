//! TOML transcoding: convert parsed JSON values to TOML text.
//!
//! Mapping:
//!   - Value::Null          -> error (TOML has no null)
//!   - Value::Bool          -> TOML boolean
//!   - Value::Int           -> TOML integer
//!   - Value::Float         -> TOML float
//!   - Value::Str           -> TOML string
//!   - Value::Array         -> TOML array (objects become inline tables)
//!   - Value::Object        -> TOML table
//!
//! Lossy edges:
//!   - TOML has no null type; null values cause an error.
//!   - TOML tables have unique keys; a repeated JSON key keeps its last value.
//!
//! The document root is always an object, so it always maps to a table.

use libjpar::Value;
use toml_edit::DocumentMut;

/// Encode a Value as a TOML string.
pub fn encode(value: &Value) -> Result<String, String> {
    let Value::Object(obj) = value else {
        return Err(format!(
            "TOML requires a table at the top level, found {}",
            value.type_name()
        ));
    };
    let mut doc = DocumentMut::new();
    for (key, value) in obj {
        doc.insert(key.as_str(), value_to_toml(value)?);
    }
    Ok(doc.to_string())
}

fn value_to_toml(value: &Value) -> Result<toml_edit::Item, String> {
    match value {
        Value::Object(obj) => {
            let mut table = toml_edit::Table::new();
            for (k, v) in obj {
                table.insert(k.as_str(), value_to_toml(v)?);
            }
            Ok(toml_edit::Item::Table(table))
        }
        other => Ok(toml_edit::Item::Value(value_to_toml_value(other)?)),
    }
}

/// Values nested in arrays must be inline.
fn value_to_toml_value(value: &Value) -> Result<toml_edit::Value, String> {
    match value {
        Value::Null => Err(format!("TOML has no {} type", value.type_name())),
        Value::Bool(b) => Ok(toml_edit::Value::Boolean(toml_edit::Formatted::new(*b))),
        Value::Int(n) => Ok(toml_edit::Value::Integer(toml_edit::Formatted::new(*n))),
        Value::Float(f) => Ok(toml_edit::Value::Float(toml_edit::Formatted::new(*f))),
        Value::Str(s) => Ok(toml_edit::Value::String(toml_edit::Formatted::new(
            s.clone(),
        ))),
        Value::Array(arr) => {
            let mut toml_arr = toml_edit::Array::new();
            for v in arr {
                toml_arr.push(value_to_toml_value(v)?);
            }
            Ok(toml_edit::Value::Array(toml_arr))
        }
        Value::Object(obj) => {
            let mut inline = toml_edit::InlineTable::new();
            for (k, v) in obj {
                inline.insert(k.as_str(), value_to_toml_value(v)?);
            }
            Ok(toml_edit::Value::InlineTable(inline))
        }
    }
}
