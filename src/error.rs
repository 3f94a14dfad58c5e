//! Error types for schema registry operations.
//!
//! `describe` and `validate` surface exactly two failure kinds:
//! - [`ValidationError`]: the document broke one or more field rules
//! - [`UnknownTypeError`]: the requested record type is not registered
//!
//! [`DefinitionError`] only occurs while building a registry.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Required field absent
    Missing,
    /// `null` on a field that does not accept it
    Null,
    /// Value cannot be read as the declared type
    Type,
    /// Below the inclusive lower bound
    Minimum,
    /// Above the inclusive upper bound
    Maximum,
    MinLength,
    MaxLength,
    /// Not one of the enumerated values
    OneOf,
    /// Text does not satisfy the declared format (email)
    Format,
    /// Undeclared field while unknown fields are forbidden
    UnknownField,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Missing => "missing",
            Rule::Null => "null",
            Rule::Type => "type",
            Rule::Minimum => "minimum",
            Rule::Maximum => "maximum",
            Rule::MinLength => "min_length",
            Rule::MaxLength => "max_length",
            Rule::OneOf => "one_of",
            Rule::Format => "format",
            Rule::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single (field, rule, reason) triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
    pub reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, rule: Rule, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.field, self.rule, self.reason)
    }
}

/// Every rule a candidate document violated.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{}", report(.type_name, .violations))]
pub struct ValidationError {
    pub type_name: String,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(type_name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            type_name: type_name.into(),
            violations,
        }
    }

    /// Returns the rules violated by `field`, in the order they were found.
    pub fn rules_for(&self, field: &str) -> Vec<Rule> {
        self.violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.rule)
            .collect()
    }
}

/// Summary line followed by one indented line per violation.
fn report(type_name: &str, violations: &[Violation]) -> String {
    let count = violations.len();
    let mut out = format!(
        "{} validation error{} for {}",
        count,
        if count == 1 { "" } else { "s" },
        type_name
    );
    for violation in violations {
        out.push_str(&format!("\n  {}", violation));
    }
    out
}

/// The requested record type (or collection) is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record type '{name}'")]
pub struct UnknownTypeError {
    pub name: String,
}

impl UnknownTypeError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Error returned by registry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),
}

impl SchemaError {
    /// Returns the validation details if this is a validation failure.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            SchemaError::Validation(e) => Some(e),
            SchemaError::UnknownType(_) => None,
        }
    }

    pub fn is_unknown_type(&self) -> bool {
        matches!(self, SchemaError::UnknownType(_))
    }
}

/// Result type for registry operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Registry construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("record type '{0}' registered twice")]
    DuplicateType(String),

    #[error("collection '{collection}' claimed by both '{first}' and '{second}'")]
    DuplicateCollection {
        collection: String,
        first: String,
        second: String,
    },

    #[error("record type '{record}' declares field '{field}' twice")]
    DuplicateField { record: String, field: String },
}
