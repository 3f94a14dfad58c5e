//! Field and record type metadata.
//!
//! Constraints are plain data; the validator walks them generically.

use serde::Serialize;
use serde_json::Value;

use super::naming::collection_name;

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    /// 64-bit float
    Number,
    /// 64-bit signed integer
    Integer,
    Boolean,
    /// Text restricted to `Constraints::one_of`
    Enum,
}

impl FieldType {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Enum => "enum",
        }
    }
}

/// Text format requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constraints {
    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        *self == Constraints::default()
    }
}

/// Metadata for one field of a record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// Whether an explicit `null` is accepted
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl FieldDescriptor {
    /// A required, non-nullable field with no constraints.
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            required: true,
            nullable: false,
            default: None,
            constraints: Constraints::default(),
            description: String::new(),
        }
    }

    pub fn text(name: &str) -> Self {
        Self::new(name, FieldType::Text)
    }

    pub fn number(name: &str) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn integer(name: &str) -> Self {
        Self::new(name, FieldType::Integer)
    }

    pub fn boolean(name: &str) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    /// Text restricted to `values`.
    pub fn choice(name: &str, values: &[&str]) -> Self {
        let mut field = Self::new(name, FieldType::Enum);
        field.constraints.one_of = Some(values.iter().map(|v| v.to_string()).collect());
        field
    }

    /// Not required, and `null` is accepted.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self.nullable = true;
        self
    }

    /// Not required; filled with `value` when absent.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.required = false;
        self.default = Some(value.into());
        self
    }

    pub fn minimum(mut self, bound: f64) -> Self {
        self.constraints.minimum = Some(bound);
        self
    }

    pub fn maximum(mut self, bound: f64) -> Self {
        self.constraints.maximum = Some(bound);
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.constraints.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.constraints.max_length = Some(len);
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.constraints.format = Some(format);
        self
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// A named record type backing one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    pub name: String,
    /// Explicit collection name, overriding the lower-cased type name
    pub collection_override: Option<String>,
    pub description: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordType {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            collection_override: None,
            description: String::new(),
            fields: Vec::new(),
        }
    }

    /// Declare a collection name other than the lower-cased type name.
    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection_override = Some(collection.to_string());
        self
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn collection(&self) -> String {
        collection_name(&self.name, self.collection_override.as_deref())
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}
