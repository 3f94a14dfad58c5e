//! Schema registry.
//!
//! Holds the record type definitions and answers the two viewer contracts:
//! `describe` for introspection and `validate` before create/update.
//! A registry is immutable once built, so shared reads need no locking.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::config::ValidatorConfig;
use crate::error::{
    DefinitionError, Rule, SchemaResult, UnknownTypeError, ValidationError, Violation,
};
use crate::log_warn;
use crate::logging::structured::LogContext;

use super::models::{builtin_types, Record};
use super::types::{FieldDescriptor, RecordType};
use super::validator::{validate_document, ROOT_FIELD};

/// Immutable set of record types.
#[derive(Debug)]
pub struct SchemaRegistry {
    types: Vec<RecordType>,
    by_name: HashMap<String, usize>,
    by_collection: HashMap<String, usize>,
    config: ValidatorConfig,
}

/// Collects record types before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    types: Vec<RecordType>,
    config: ValidatorConfig,
}

impl RegistryBuilder {
    pub fn register(mut self, record: RecordType) -> Self {
        self.types.push(record);
        self
    }

    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Freeze the registry.
    ///
    /// Fails if a type name, a collection name, or a field name within one
    /// type is declared twice.
    pub fn build(self) -> Result<SchemaRegistry, DefinitionError> {
        let mut by_name = HashMap::new();
        let mut by_collection: HashMap<String, usize> = HashMap::new();

        for (idx, record) in self.types.iter().enumerate() {
            if by_name.insert(record.name.clone(), idx).is_some() {
                return Err(DefinitionError::DuplicateType(record.name.clone()));
            }

            let collection = record.collection();
            if let Some(&first) = by_collection.get(&collection) {
                return Err(DefinitionError::DuplicateCollection {
                    collection,
                    first: self.types[first].name.clone(),
                    second: record.name.clone(),
                });
            }
            by_collection.insert(collection, idx);

            for (i, field) in record.fields.iter().enumerate() {
                if record.fields[..i].iter().any(|f| f.name == field.name) {
                    return Err(DefinitionError::DuplicateField {
                        record: record.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }

        log::info!(
            "REGISTRY_BUILT types={:?} collections={:?}",
            self.types.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            self.types.iter().map(|t| t.collection()).collect::<Vec<_>>()
        );

        Ok(SchemaRegistry {
            types: self.types,
            by_name,
            by_collection,
            config: self.config,
        })
    }
}

impl SchemaRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry of the built-in `User`, `Product` and `Lead` types.
    pub fn builtin() -> Result<Self, DefinitionError> {
        builtin_types()
            .into_iter()
            .fold(Self::builder(), RegistryBuilder::register)
            .build()
    }

    /// Registered type names, in registration order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn get(&self, type_name: &str) -> Option<&RecordType> {
        self.by_name.get(type_name).map(|&idx| &self.types[idx])
    }

    pub fn get_by_collection(&self, collection: &str) -> Option<&RecordType> {
        self.by_collection.get(collection).map(|&idx| &self.types[idx])
    }

    /// Collection backing `type_name`.
    pub fn collection_for(&self, type_name: &str) -> Result<String, UnknownTypeError> {
        self.get(type_name)
            .map(RecordType::collection)
            .ok_or_else(|| UnknownTypeError::new(type_name))
    }

    /// Describe every registered record type.
    pub fn describe(&self) -> SchemaDescription<'_> {
        SchemaDescription {
            records: self
                .types
                .iter()
                .map(|t| RecordDescription {
                    name: &t.name,
                    collection: t.collection(),
                    description: &t.description,
                    fields: &t.fields,
                })
                .collect(),
        }
    }

    /// Validate a candidate document for `type_name` with the registry's config.
    pub fn validate(&self, type_name: &str, document: &Value) -> SchemaResult<Map<String, Value>> {
        self.validate_with(type_name, document, &self.config)
    }

    pub fn validate_with(
        &self,
        type_name: &str,
        document: &Value,
        config: &ValidatorConfig,
    ) -> SchemaResult<Map<String, Value>> {
        let ctx = LogContext::generate().with_type(type_name);
        let record = self.lookup(type_name, &ctx)?;
        Ok(validate_document(record, document, config, &ctx)?)
    }

    /// Validate a candidate document addressed by collection name.
    pub fn validate_collection(
        &self,
        collection: &str,
        document: &Value,
    ) -> SchemaResult<Map<String, Value>> {
        self.validate_collection_with(collection, document, &self.config)
    }

    pub fn validate_collection_with(
        &self,
        collection: &str,
        document: &Value,
        config: &ValidatorConfig,
    ) -> SchemaResult<Map<String, Value>> {
        let ctx = LogContext::generate();
        let record = match self.get_by_collection(collection) {
            Some(record) => record,
            None => {
                log_warn!(
                    ctx,
                    "UNKNOWN_COLLECTION",
                    collection = collection,
                    known = self.by_collection.keys().collect::<Vec<_>>()
                );
                return Err(UnknownTypeError::new(collection).into());
            }
        };
        let ctx = ctx.with_type(&record.name);
        Ok(validate_document(record, document, config, &ctx)?)
    }

    /// Validate and deserialize into the typed record.
    pub fn validate_as<T: Record>(&self, document: &Value) -> SchemaResult<T> {
        let normalized = self.validate(T::TYPE_NAME, document)?;
        serde_json::from_value(Value::Object(normalized)).map_err(|e| {
            ValidationError::new(
                T::TYPE_NAME,
                vec![Violation::new(ROOT_FIELD, Rule::Type, e.to_string())],
            )
            .into()
        })
    }

    fn lookup(&self, type_name: &str, ctx: &LogContext) -> Result<&RecordType, UnknownTypeError> {
        self.get(type_name).ok_or_else(|| {
            log_warn!(ctx, "UNKNOWN_TYPE", known = self.type_names());
            UnknownTypeError::new(type_name)
        })
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: SchemaRegistry =
        SchemaRegistry::builtin().expect("built-in record types are consistent");
}

/// The process-wide registry of built-in record types.
pub fn default_registry() -> &'static SchemaRegistry {
    &DEFAULT_REGISTRY
}

/// One record type as reported to the viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDescription<'a> {
    pub name: &'a str,
    pub collection: String,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'a str,
    pub fields: &'a [FieldDescriptor],
}

/// Output of [`SchemaRegistry::describe`].
///
/// Serializes as `{ "<collection>": [<field descriptor>, ...], ... }` in
/// registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDescription<'a> {
    pub records: Vec<RecordDescription<'a>>,
}

impl SchemaDescription<'_> {
    pub fn collection(&self, collection: &str) -> Option<&RecordDescription<'_>> {
        self.records.iter().find(|r| r.collection == collection)
    }

    pub fn to_json(&self) -> Value {
        // String keys and plain field descriptors always serialize
        serde_json::to_value(self).expect("schema description serializes to JSON")
    }

    /// SHA-256 of the serialized description, hex encoded.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_json().to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl Serialize for SchemaDescription<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.collection, record.fields)?;
        }
        map.end()
    }
}
