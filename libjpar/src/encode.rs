//! Encode values back to JSON text.
//!
//! String contents are written between quotes exactly as captured. The
//! parser keeps escape sequences undecoded and a captured string never holds
//! a quote, so every character (raw control characters included) passes
//! through untouched and re-parses to the same string.

use crate::Value;

/// Output format for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Single-line JSON with no insignificant white space.
    Json,
    /// JSON indented by two spaces per level.
    JsonPretty,
}

/// Encode a value to a string in the specified format.
pub fn encode(value: &Value, format: Format) -> String {
    match format {
        Format::Json => encode_json(value),
        Format::JsonPretty => encode_json_pretty(value, 0),
    }
}

fn encode_json(value: &Value) -> String {
    match value {
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(encode_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(obj) => {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{}:{}", encode_json_string(k), encode_json(v)))
                .collect();
            format!("{{{}}}", items.join(","))
        }
        scalar => encode_scalar(scalar),
    }
}

fn encode_json_pretty(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let pad1 = "  ".repeat(indent + 1);

    match value {
        Value::Array(arr) if arr.is_empty() => "[]".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr
                .iter()
                .map(|v| format!("{}{}", pad1, encode_json_pretty(v, indent + 1)))
                .collect();
            format!("[\n{}\n{}]", items.join(",\n"), pad)
        }
        Value::Object(obj) if obj.is_empty() => "{}".to_string(),
        Value::Object(obj) => {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}{}: {}",
                        pad1,
                        encode_json_string(k),
                        encode_json_pretty(v, indent + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", items.join(",\n"), pad)
        }
        scalar => encode_scalar(scalar),
    }
}

fn encode_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => encode_float(*f),
        Value::Str(s) => encode_json_string(s),
        Value::Array(_) | Value::Object(_) => encode_json(value),
    }
}

/// Floats always carry a fraction or exponent so they read back as floats.
fn encode_float(f: f64) -> String {
    if f.is_nan() || f.is_infinite() {
        // JSON doesn't support NaN/Infinity
        "null".to_string()
    } else {
        format!("{:?}", f)
    }
}

fn encode_json_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    result.push_str(s);
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        Value::Object(vec![
            ("name".into(), Value::from("jpar")),
            (
                "list".into(),
                Value::Array(vec![Value::Int(1), Value::Float(2.0), Value::Null]),
            ),
            ("empty".into(), Value::Object(vec![])),
            ("name".into(), Value::Bool(false)),
        ])
    }

    #[test]
    fn test_encode_compact() {
        assert_eq!(
            encode(&sample(), Format::Json),
            r#"{"name":"jpar","list":[1,2.0,null],"empty":{},"name":false}"#
        );
    }

    #[test]
    fn test_encode_pretty() {
        let expected = "{\n  \"name\": \"jpar\",\n  \"list\": [\n    1,\n    2.0,\n    null\n  ],\n  \"empty\": {},\n  \"name\": false\n}";
        assert_eq!(encode(&sample(), Format::JsonPretty), expected);
    }

    #[test]
    fn test_encode_escapes_pass_through() {
        let value = Value::Object(vec![("k".into(), Value::from(r"a\nbA"))]);
        assert_eq!(encode(&value, Format::Json), r#"{"k":"a\nbA"}"#);
    }

    #[test]
    fn test_encode_raw_control_characters() {
        let value = crate::parse(b"{\"a\":\"x\ty\nz\x01\"}").unwrap();
        assert_eq!(value.get("a").and_then(Value::as_str), Some("x\ty\nz\x01"));
        for format in [Format::Json, Format::JsonPretty] {
            let text = encode(&value, format);
            assert!(text.contains("x\ty\nz\x01"), "{:?}", text);
            assert_eq!(crate::parse(text.as_bytes()).unwrap(), value);
        }
    }

    #[test]
    fn test_encode_floats() {
        assert_eq!(encode(&Value::Float(1.0), Format::Json), "1.0");
        assert_eq!(encode(&Value::Float(-0.25), Format::Json), "-0.25");
        assert_eq!(encode(&Value::Float(f64::INFINITY), Format::Json), "null");
    }

    #[test]
    fn test_encode_round_trip() {
        let input = r#"{"a":[1,2.5,true,null,{"b":"c"}],"a":-7}"#;
        let value = crate::parse(input.as_bytes()).unwrap();
        assert_eq!(encode(&value, Format::Json), input);
    }
}
