use crate::error::CoreError;
use serde_json::Value;
use std::fmt;

/// A single field value as it appears in a rendered `Entry` literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(u64),
    Boolean(bool),
    Text(String),
}

/// Text fields accept JSON strings only.
pub fn text_from_json(field: &'static str, value: &Value) -> Result<String, CoreError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(unsupported(field, other)),
    }
}

/// Integers pass through. Integral floats, booleans and text holding a plain
/// integer are converted; negative or fractional numbers are malformed.
pub fn integer_from_json(field: &'static str, value: &Value) -> Result<u64, CoreError> {
    match value {
        Value::Number(number) => match (number.as_u64(), number.as_f64()) {
            (Some(n), _) => Ok(n),
            (None, Some(f)) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
                Ok(f as u64)
            }
            _ => Err(CoreError::InvalidNumber {
                field,
                value: number.to_string(),
            }),
        },
        Value::Bool(flag) => Ok(u64::from(*flag)),
        Value::String(text) => parse_integer(field, text),
        other => Err(unsupported(field, other)),
    }
}

/// Set when the value equals one: `1`, `1.0` or `true`. Anything else,
/// including text and null, is unset.
pub fn flag_from_json(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() == Some(1.0),
        _ => false,
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(true) => f.write_str("true"),
            Self::Boolean(false) => f.write_str("false"),
            Self::Text(text) => f.write_str(&quote_str(text)),
        }
    }
}

pub fn parse_integer(field: &'static str, raw: &str) -> Result<u64, CoreError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| CoreError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders `value` as a double-quoted Rust string literal.
pub fn quote_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn unsupported(field: &'static str, value: &Value) -> CoreError {
    CoreError::UnsupportedType {
        field,
        kind: json_kind(value),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_requires_string() {
        assert_eq!(text_from_json("name", &json!("Jane")).unwrap(), "Jane");
        for value in [json!(null), json!(3), json!(1.5), json!([1]), json!({"a": 1})] {
            let err = text_from_json("subject", &value).unwrap_err();
            assert!(matches!(err, CoreError::UnsupportedType { .. }), "{err}");
        }
    }

    #[test]
    fn unsupported_error_carries_value_and_kind() {
        let err = text_from_json("subject", &json!(null)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported null value for field `subject`: null"
        );
        let err = text_from_json("name", &json!(2.5)).unwrap_err();
        assert!(err.to_string().contains("unsupported float"));
    }

    #[test]
    fn integer_accepts_numbers_flags_and_numeric_text() {
        assert_eq!(integer_from_json("time", &json!(100)).unwrap(), 100);
        assert_eq!(integer_from_json("time", &json!(100.0)).unwrap(), 100);
        assert_eq!(integer_from_json("time", &json!(true)).unwrap(), 1);
        assert_eq!(integer_from_json("time", &json!(false)).unwrap(), 0);
        assert_eq!(
            integer_from_json("time", &json!(" 1612134000 ")).unwrap(),
            1_612_134_000
        );
    }

    #[test]
    fn integer_rejects_negative_fractional_and_non_numeric() {
        for value in [json!(-5), json!(-1.0), json!(100.5), json!("soon")] {
            let err = integer_from_json("time", &value).unwrap_err();
            assert!(matches!(err, CoreError::InvalidNumber { .. }), "{err}");
        }
        let err = integer_from_json("time", &json!(null)).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedType { kind: "null", .. }));
    }

    #[test]
    fn flags_follow_equals_one_rule() {
        assert!(flag_from_json(&json!(1)));
        assert!(flag_from_json(&json!(1.0)));
        assert!(flag_from_json(&json!(true)));
        assert!(!flag_from_json(&json!(0)));
        assert!(!flag_from_json(&json!(2)));
        assert!(!flag_from_json(&json!(-1)));
        assert!(!flag_from_json(&json!(false)));
        assert!(!flag_from_json(&json!("1")));
        assert!(!flag_from_json(&json!(null)));
        assert!(!flag_from_json(&json!([1])));
    }

    #[test]
    fn display_renders_literals() {
        assert_eq!(FieldValue::Integer(2021).to_string(), "2021");
        assert_eq!(FieldValue::Boolean(false).to_string(), "false");
        assert_eq!(FieldValue::Text("Hi".to_string()).to_string(), "\"Hi\"");
    }

    #[test]
    fn quote_str_escapes_quotes_and_backslashes() {
        assert_eq!(quote_str(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
        assert_eq!(quote_str("a\nb"), "\"a\\nb\"");
        assert_eq!(quote_str("\u{7}"), "\"\\u{7}\"");
        assert_eq!(quote_str("Grüße"), "\"Grüße\"");
    }
}
