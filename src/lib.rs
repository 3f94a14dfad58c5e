//! Flames Schemas - collection schemas for the Flames database viewer
//!
//! This crate declares the shape of each document collection the viewer
//! manages and validates candidate documents before the viewer persists them.
//! It owns no storage, transport or UI; it is the contract the viewer reads.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `schema` - Record type definitions, registry, and the generic validator
//! - `error` - Validation and unknown-type errors
//! - `config` - Validator options (unknown field policy, strict mode)
//! - `logging` - Structured logging with request context
//! - `python` - PyO3 bindings for the viewer (feature `python`)
//!
//! ## Example
//!
//! ```
//! use flames_schemas::default_registry;
//! use serde_json::json;
//!
//! let registry = default_registry();
//! let doc = registry
//!     .validate("User", &json!({"name": "Ada", "email": "ada@example.com", "address": "1 Loop Rd"}))
//!     .unwrap();
//! assert_eq!(doc["is_active"], json!(true));
//! assert!(registry.validate("Invoice", &json!({})).is_err());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod schema;

#[cfg(feature = "python")]
mod python;

pub use config::{UnknownFieldPolicy, ValidatorConfig};
pub use error::{
    DefinitionError, Rule, SchemaError, SchemaResult, UnknownTypeError, ValidationError,
    Violation,
};
pub use schema::{default_registry, SchemaDescription, SchemaRegistry};

/// Initialize the process logger.
///
/// Info level by default; `RUST_LOG` overrides. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
