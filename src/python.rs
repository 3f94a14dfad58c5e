//! PyO3 bindings for the viewer.
//!
//! Exposes the introspection and validation contracts to the Python side.
//! Documents cross the boundary as JSON strings.

use lazy_static::lazy_static;
use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyValueError};
use pyo3::prelude::*;
use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::error::SchemaError;
use crate::init_logger;
use crate::schema::default_registry;

create_exception!(flames_schemas, ValidationError, PyException);
create_exception!(flames_schemas, UnknownTypeError, PyException);

lazy_static! {
    static ref CONFIG: ValidatorConfig = ValidatorConfig::from_env();
}

fn to_py_err(err: SchemaError) -> PyErr {
    match err {
        SchemaError::Validation(e) => {
            let payload = serde_json::to_string(&e.violations).unwrap_or_else(|_| e.to_string());
            ValidationError::new_err(payload)
        }
        SchemaError::UnknownType(e) => UnknownTypeError::new_err(e.to_string()),
    }
}

fn parse_document(document: &str) -> PyResult<Value> {
    serde_json::from_str(document)
        .map_err(|e| PyValueError::new_err(format!("JSON parse error: {}", e)))
}

fn to_json_string(value: Value) -> PyResult<String> {
    serde_json::to_string(&value).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Schema description as JSON: `{collection: [field, ...]}`.
#[pyfunction]
fn get_schema() -> PyResult<String> {
    init_logger();
    to_json_string(default_registry().describe().to_json())
}

/// SHA-256 fingerprint of the schema description.
#[pyfunction]
fn schema_fingerprint() -> String {
    default_registry().describe().fingerprint()
}

/// Collection backing a record type.
#[pyfunction]
fn collection_name(type_name: &str) -> PyResult<String> {
    default_registry()
        .collection_for(type_name)
        .map_err(|e| UnknownTypeError::new_err(e.to_string()))
}

/// Validate a JSON document for a record type; returns the normalized JSON.
#[pyfunction]
fn validate_document(type_name: &str, document: &str) -> PyResult<String> {
    init_logger();
    let doc = parse_document(document)?;
    let normalized = default_registry()
        .validate_with(type_name, &doc, &CONFIG)
        .map_err(to_py_err)?;
    to_json_string(Value::Object(normalized))
}

/// Validate a JSON document addressed by collection name.
#[pyfunction]
fn validate_collection(collection: &str, document: &str) -> PyResult<String> {
    init_logger();
    let doc = parse_document(document)?;
    let normalized = default_registry()
        .validate_collection_with(collection, &doc, &CONFIG)
        .map_err(to_py_err)?;
    to_json_string(Value::Object(normalized))
}

/// Python module definition
#[pymodule]
fn flames_schemas(py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add("ValidationError", py.get_type::<ValidationError>())?;
    m.add("UnknownTypeError", py.get_type::<UnknownTypeError>())?;
    m.add_function(wrap_pyfunction!(get_schema, m)?)?;
    m.add_function(wrap_pyfunction!(schema_fingerprint, m)?)?;
    m.add_function(wrap_pyfunction!(collection_name, m)?)?;
    m.add_function(wrap_pyfunction!(validate_document, m)?)?;
    m.add_function(wrap_pyfunction!(validate_collection, m)?)?;
    Ok(())
}
