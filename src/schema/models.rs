//! Built-in record types.
//!
//! Each type has a declarative definition (consumed by the validator and by
//! `describe`) and a typed struct for callers that want one after validation.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::types::{FieldDescriptor, Format, RecordType};

/// Longest accepted lead message, in characters.
pub const LEAD_MESSAGE_MAX_LEN: usize = 2000;

/// Application end user. Collection: `user`.
pub fn user() -> RecordType {
    RecordType::new("User")
        .describe("Users collection schema")
        .field(FieldDescriptor::text("name").min_length(1).describe("Full name"))
        .field(FieldDescriptor::text("email").describe("Email address"))
        .field(FieldDescriptor::text("address").describe("Address"))
        .field(
            FieldDescriptor::integer("age")
                .optional()
                .minimum(0.0)
                .maximum(120.0)
                .describe("Age in years"),
        )
        .field(
            FieldDescriptor::boolean("is_active")
                .default_value(true)
                .describe("Whether user is active"),
        )
}

/// Sellable item. Collection: `product`.
pub fn product() -> RecordType {
    RecordType::new("Product")
        .describe("Products collection schema")
        .field(FieldDescriptor::text("title").describe("Product title"))
        .field(
            FieldDescriptor::text("description")
                .optional()
                .describe("Product description"),
        )
        .field(
            FieldDescriptor::number("price")
                .minimum(0.0)
                .describe("Price in dollars"),
        )
        .field(FieldDescriptor::text("category").describe("Product category"))
        .field(
            FieldDescriptor::boolean("in_stock")
                .default_value(true)
                .describe("Whether product is in stock"),
        )
}

/// Sales inquiry captured from the website form. Collection: `lead`.
pub fn lead() -> RecordType {
    RecordType::new("Lead")
        .describe("Leads captured from the website")
        .field(
            FieldDescriptor::text("name")
                .min_length(2)
                .describe("Contact person full name"),
        )
        .field(
            FieldDescriptor::text("email")
                .format(Format::Email)
                .describe("Work email"),
        )
        .field(
            FieldDescriptor::text("company")
                .optional()
                .describe("Company or organization"),
        )
        .field(FieldDescriptor::text("role").optional().describe("Role or title"))
        .field(FieldDescriptor::text("phone").optional().describe("Phone number"))
        .field(
            FieldDescriptor::text("project_type")
                .optional()
                .describe("Type of development (e.g., residential, commercial)"),
        )
        .field(
            FieldDescriptor::choice("timeline", Timeline::VALUES)
                .optional()
                .describe("Indicative timeline"),
        )
        .field(
            FieldDescriptor::choice("budget_range", BudgetRange::VALUES)
                .optional()
                .describe("Budget range"),
        )
        .field(
            FieldDescriptor::text("message")
                .optional()
                .max_length(LEAD_MESSAGE_MAX_LEN)
                .describe("Short project brief"),
        )
        .field(
            FieldDescriptor::text("source")
                .optional()
                .default_value("website")
                .describe("Lead source"),
        )
        .field(FieldDescriptor::boolean("consent").describe("Consent to be contacted"))
}

/// All built-in record types, in registration order.
pub fn builtin_types() -> Vec<RecordType> {
    vec![user(), product(), lead()]
}

/// A typed view of a record type's normalized document.
pub trait Record: DeserializeOwned {
    /// Registered record type name
    const TYPE_NAME: &'static str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    pub is_active: bool,
}

impl Record for User {
    const TYPE_NAME: &'static str = "User";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Record for Product {
    const TYPE_NAME: &'static str = "Product";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "<3 months")]
    UnderThreeMonths,
    #[serde(rename = "3-6 months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12 months")]
    SixToTwelveMonths,
    #[serde(rename = ">12 months")]
    OverTwelveMonths,
}

impl Timeline {
    pub const VALUES: &'static [&'static str] =
        &["<3 months", "3-6 months", "6-12 months", ">12 months"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "< $1M")]
    UnderOneMillion,
    #[serde(rename = "$1M-$5M")]
    OneToFiveMillion,
    #[serde(rename = "$5M-$20M")]
    FiveToTwentyMillion,
    #[serde(rename = "> $20M")]
    OverTwentyMillion,
}

impl BudgetRange {
    pub const VALUES: &'static [&'static str] = &["< $1M", "$1M-$5M", "$5M-$20M", "> $20M"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub consent: bool,
}

impl Record for Lead {
    const TYPE_NAME: &'static str = "Lead";
}
