//! YAML transcoding: convert parsed JSON values to YAML text.
//!
//! Mapping:
//!   - Value::Null         -> YAML null
//!   - Value::Bool         -> YAML bool
//!   - Value::Int          -> YAML integer
//!   - Value::Float        -> YAML float (including .nan, .inf, -.inf)
//!   - Value::Str          -> YAML string (escape sequences kept as written)
//!   - Value::Array        -> YAML sequence
//!   - Value::Object       -> YAML mapping
//!
//! Lossy edges:
//!   - YAML mappings have unique keys; a repeated JSON key keeps its first
//!     position and its last value.

use libjpar::Value;

/// Encode a Value as a YAML string.
pub fn encode(value: &Value) -> Result<String, String> {
    let yaml_value = value_to_yaml(value);
    serde_yaml::to_string(&yaml_value).map_err(|e| format!("YAML encode error: {}", e))
}

fn value_to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Int(n) => serde_yaml::Value::Number(serde_yaml::Number::from(*n)),
        Value::Float(f) => serde_yaml::Value::Number(serde_yaml::Number::from(*f)),
        Value::Str(s) => serde_yaml::Value::String(s.clone()),
        Value::Array(arr) => serde_yaml::Value::Sequence(arr.iter().map(value_to_yaml).collect()),
        Value::Object(obj) => {
            let mut map = serde_yaml::Mapping::new();
            for (k, v) in obj {
                map.insert(serde_yaml::Value::String(k.clone()), value_to_yaml(v));
            }
            serde_yaml::Value::Mapping(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_object() {
        let value = libjpar::parse(br#"{"name": "jpar", "tags": [1, true, null]}"#).unwrap();
        let yaml = encode(&value).unwrap();
        assert_eq!(yaml, "name: jpar\ntags:\n- 1\n- true\n- null\n");
    }

    #[test]
    fn test_duplicate_keys_keep_last_value() {
        let value = libjpar::parse(br#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let yaml = encode(&value).unwrap();
        assert_eq!(yaml, "a: 3\nb: 2\n");
    }

    #[test]
    fn test_floats() {
        let value = libjpar::parse(br#"{"x": 1.5}"#).unwrap();
        assert_eq!(encode(&value).unwrap(), "x: 1.5\n");
    }
}
