//! Generic document validator.
//!
//! Walks a record type's field descriptors and checks a candidate document:
//! - Required fields are present and non-null
//! - Values read as their declared type (with coercion unless strict)
//! - Range, length, enumeration and format constraints hold
//! - Absent optional fields receive their declared default
//!
//! Every violation is collected; validation never stops at the first one.

use serde_json::{Map, Value};

use crate::config::{UnknownFieldPolicy, ValidatorConfig};
use crate::error::{Rule, ValidationError, Violation};
use crate::logging::structured::LogContext;
use crate::{log_debug, log_info};

use super::coerce::{json_type_name, to_boolean, to_integer, to_number, to_text};
use super::format::normalize_email;
use super::types::{FieldDescriptor, FieldType, Format, RecordType};

/// Field name used for violations about the document itself.
pub const ROOT_FIELD: &str = "$root";

/// Validate `document` against `record`.
///
/// Returns the normalized document: defaults filled in, values coerced to
/// their declared types, fields in declaration order.
pub fn validate_document(
    record: &RecordType,
    document: &Value,
    config: &ValidatorConfig,
    ctx: &LogContext,
) -> Result<Map<String, Value>, ValidationError> {
    log_debug!(
        ctx,
        "VALIDATION_START",
        fields = record.fields.len(),
        strict = config.strict
    );

    let obj = match document.as_object() {
        Some(obj) => obj,
        None => {
            let violation = Violation::new(
                ROOT_FIELD,
                Rule::Type,
                format!("document must be an object, got {}", json_type_name(document)),
            );
            return Err(fail(record, vec![violation], ctx));
        }
    };

    let mut violations = Vec::new();
    let mut normalized = Map::new();

    for field in &record.fields {
        match obj.get(&field.name) {
            None => {
                if field.required {
                    violations.push(Violation::new(&field.name, Rule::Missing, "field required"));
                } else if let Some(default) = &field.default {
                    normalized.insert(field.name.clone(), default.clone());
                }
            }
            Some(Value::Null) => {
                if field.nullable {
                    normalized.insert(field.name.clone(), Value::Null);
                } else {
                    violations.push(Violation::new(&field.name, Rule::Null, "field may not be null"));
                }
            }
            Some(value) => {
                if let Some(v) = check_value(field, value, config.strict, &mut violations) {
                    normalized.insert(field.name.clone(), v);
                }
            }
        }
    }

    for (key, value) in obj {
        if record.get_field(key).is_some() {
            continue;
        }
        match config.unknown_fields {
            UnknownFieldPolicy::Ignore => {}
            UnknownFieldPolicy::Allow => {
                normalized.insert(key.clone(), value.clone());
            }
            UnknownFieldPolicy::Forbid => violations.push(Violation::new(
                key.as_str(),
                Rule::UnknownField,
                "field is not declared",
            )),
        }
    }

    if !violations.is_empty() {
        return Err(fail(record, violations, ctx));
    }

    log_debug!(ctx, "VALIDATION_PASSED", fields = normalized.len());
    Ok(normalized)
}

fn fail(record: &RecordType, violations: Vec<Violation>, ctx: &LogContext) -> ValidationError {
    for violation in &violations {
        log_debug!(
            ctx,
            "FIELD_VIOLATION",
            field = violation.field,
            rule = violation.rule.as_str(),
            reason = violation.reason
        );
    }
    log_info!(ctx, "VALIDATION_FAILED", violations = violations.len());
    ValidationError::new(&record.name, violations)
}

/// Coerce and constraint-check a non-null value.
///
/// Returns the normalized value, or `None` if it could not be read as the
/// declared type.
fn check_value(
    field: &FieldDescriptor,
    value: &Value,
    strict: bool,
    violations: &mut Vec<Violation>,
) -> Option<Value> {
    let expected = field.field_type.type_name();
    let type_violation = || {
        Violation::new(
            &field.name,
            Rule::Type,
            format!("expected {}, got {}", expected, json_type_name(value)),
        )
    };

    match field.field_type {
        FieldType::Text | FieldType::Enum => {
            let Some(text) = to_text(value) else {
                violations.push(type_violation());
                return None;
            };
            check_text(field, text, violations).map(Value::String)
        }
        FieldType::Integer => {
            let Some(i) = to_integer(value, strict) else {
                violations.push(type_violation());
                return None;
            };
            check_range(field, i as f64, violations);
            Some(Value::from(i))
        }
        FieldType::Number => {
            let Some(f) = to_number(value, strict) else {
                violations.push(type_violation());
                return None;
            };
            if !f.is_finite() {
                violations.push(Violation::new(&field.name, Rule::Type, "expected a finite number"));
                return None;
            }
            check_range(field, f, violations);
            Some(Value::from(f))
        }
        FieldType::Boolean => {
            let Some(b) = to_boolean(value, strict) else {
                violations.push(type_violation());
                return None;
            };
            Some(Value::Bool(b))
        }
    }
}

fn check_text(field: &FieldDescriptor, text: &str, violations: &mut Vec<Violation>) -> Option<String> {
    let c = &field.constraints;
    let len = text.chars().count();

    if let Some(min) = c.min_length {
        if len < min {
            violations.push(Violation::new(
                &field.name,
                Rule::MinLength,
                format!("must have at least {} character{}", min, plural(min)),
            ));
        }
    }
    if let Some(max) = c.max_length {
        if len > max {
            violations.push(Violation::new(
                &field.name,
                Rule::MaxLength,
                format!("must have at most {} character{}", max, plural(max)),
            ));
        }
    }
    if let Some(allowed) = &c.one_of {
        if !allowed.iter().any(|a| a == text) {
            let listed: Vec<String> = allowed.iter().map(|a| format!("'{}'", a)).collect();
            violations.push(Violation::new(
                &field.name,
                Rule::OneOf,
                format!("must be one of: {}", listed.join(", ")),
            ));
        }
    }

    match c.format {
        Some(Format::Email) => match normalize_email(text) {
            Ok(address) => Some(address),
            Err(reason) => {
                violations.push(Violation::new(
                    &field.name,
                    Rule::Format,
                    format!("not a valid email address: {}", reason),
                ));
                None
            }
        },
        None => Some(text.to_string()),
    }
}

fn check_range(field: &FieldDescriptor, n: f64, violations: &mut Vec<Violation>) {
    let c = &field.constraints;
    if let Some(min) = c.minimum {
        if n < min {
            violations.push(Violation::new(
                &field.name,
                Rule::Minimum,
                format!("must be greater than or equal to {}", min),
            ));
        }
    }
    if let Some(max) = c.maximum {
        if n > max {
            violations.push(Violation::new(
                &field.name,
                Rule::Maximum,
                format!("must be less than or equal to {}", max),
            ));
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
