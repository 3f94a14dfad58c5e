//! Value coercion to declared field types.
//!
//! Lax mode reads numbers and booleans out of their common string spellings.
//! Strict mode accepts only values that already have the declared JSON type.
//! Booleans are never read as numbers.

use serde_json::Value;

/// Read an integer: JSON integers, integral floats, and (lax) integer strings.
pub fn to_integer(value: &Value, strict: bool) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            if strict {
                return None;
            }
            n.as_f64().and_then(integral_f64)
        }
        Value::String(s) if !strict => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a number: JSON integers, floats, and (lax) numeric strings.
///
/// May return a non-finite value for strings like `"inf"`; callers check.
pub fn to_number(value: &Value, strict: bool) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !strict => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a boolean: JSON booleans, and (lax) `0`/`1` or common string spellings.
pub fn to_boolean(value: &Value, strict: bool) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        _ if strict => None,
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
            "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Read text. Only JSON strings qualify, in either mode.
pub fn to_text(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Name of the JSON type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn integral_f64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_lax() {
        assert_eq!(to_integer(&json!(42), false), Some(42));
        assert_eq!(to_integer(&json!(30.0), false), Some(30));
        assert_eq!(to_integer(&json!(" 7 "), false), Some(7));
        assert_eq!(to_integer(&json!(30.5), false), None);
        assert_eq!(to_integer(&json!("30.5"), false), None);
        assert_eq!(to_integer(&json!(true), false), None);
        assert_eq!(to_integer(&json!(1e300), false), None);
    }

    #[test]
    fn test_integer_strict() {
        assert_eq!(to_integer(&json!(42), true), Some(42));
        assert_eq!(to_integer(&json!(30.0), true), None);
        assert_eq!(to_integer(&json!("42"), true), None);
    }

    #[test]
    fn test_number() {
        assert_eq!(to_number(&json!(1.5), false), Some(1.5));
        assert_eq!(to_number(&json!(3), false), Some(3.0));
        assert_eq!(to_number(&json!("2.5"), false), Some(2.5));
        assert_eq!(to_number(&json!("2.5"), true), None);
        assert_eq!(to_number(&json!(false), false), None);
        assert!(to_number(&json!("inf"), false).is_some_and(|f| f.is_infinite()));
    }

    #[test]
    fn test_boolean() {
        assert_eq!(to_boolean(&json!(true), false), Some(true));
        assert_eq!(to_boolean(&json!("Yes"), false), Some(true));
        assert_eq!(to_boolean(&json!("off"), false), Some(false));
        assert_eq!(to_boolean(&json!(0), false), Some(false));
        assert_eq!(to_boolean(&json!(2), false), None);
        assert_eq!(to_boolean(&json!("maybe"), false), None);
        assert_eq!(to_boolean(&json!("true"), true), None);
    }

    #[test]
    fn test_text_and_type_names() {
        assert_eq!(to_text(&json!("x")), Some("x"));
        assert_eq!(to_text(&json!(1)), None);
        assert_eq!(json_type_name(&json!(1)), "integer");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!(null)), "null");
    }
}
