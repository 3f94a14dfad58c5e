//! Schema registry module.
//!
//! Declarative record type definitions for the viewer's collections:
//! - Field metadata and constraints as plain data
//! - Collection naming policy (lower-cased type name, or explicit override)
//! - A generic validator that walks the metadata
//! - The immutable registry answering `describe` and `validate`

pub mod coerce;
pub mod format;
pub mod models;
pub mod naming;
pub mod registry;
pub mod types;
pub mod validator;

pub use models::{BudgetRange, Lead, Product, Record, Timeline, User};
pub use naming::collection_name;
pub use registry::*;
pub use types::*;
pub use validator::validate_document;
