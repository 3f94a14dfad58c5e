//! Viewer-facing contract of the built-in registry.

use flames_schemas::schema::{FieldDescriptor, RecordType};
use flames_schemas::{default_registry, Rule, SchemaError, SchemaRegistry};
use serde_json::{json, Value};

fn assert_field_fails(type_name: &str, doc: Value, field: &str, rule: Rule) {
    match default_registry().validate(type_name, &doc) {
        Err(SchemaError::Validation(err)) => assert!(
            err.rules_for(field).contains(&rule),
            "{} on {}: {:?}",
            field,
            type_name,
            err.violations
        ),
        other => panic!("expected validation failure on {}, got {:?}", field, other),
    }
}

#[test]
fn test_complete_documents_accepted_with_defaults() {
    let registry = default_registry();

    let user = registry
        .validate("User", &json!({"name": "Ada", "email": "ada@example.com", "address": "1 Loop Rd"}))
        .unwrap();
    assert_eq!(user["is_active"], json!(true));

    let product = registry
        .validate("Product", &json!({"title": "Lamp", "price": "19.99", "category": "home"}))
        .unwrap();
    assert_eq!(product["price"], json!(19.99));
    assert_eq!(product["in_stock"], json!(true));
    assert!(!product.contains_key("description"));

    let lead = registry
        .validate("Lead", &json!({"name": "Al", "email": "a@b.com", "consent": false}))
        .unwrap();
    assert_eq!(lead["source"], json!("website"));
    assert_eq!(lead["consent"], json!(false));
}

#[test]
fn test_missing_required_fields_named() {
    for (type_name, field) in [
        ("User", "name"),
        ("User", "email"),
        ("User", "address"),
        ("Product", "title"),
        ("Product", "price"),
        ("Product", "category"),
        ("Lead", "name"),
        ("Lead", "email"),
        ("Lead", "consent"),
    ] {
        assert_field_fails(type_name, json!({}), field, Rule::Missing);
    }
}

#[test]
fn test_user_age_bounds() {
    let base = json!({"name": "Ada", "email": "ada@example.com", "address": "1 Loop Rd"});
    for (age, ok) in [(-1, false), (0, true), (120, true), (121, false)] {
        let mut doc = base.clone();
        doc["age"] = json!(age);
        assert_eq!(default_registry().validate("User", &doc).is_ok(), ok, "age={}", age);
    }
}

#[test]
fn test_product_price_bound() {
    let doc = json!({"title": "Lamp", "price": -0.01, "category": "home"});
    assert_field_fails("Product", doc, "price", Rule::Minimum);

    let doc = json!({"title": "Lamp", "price": 0, "category": "home"});
    assert!(default_registry().validate("Product", &doc).is_ok());
}

#[test]
fn test_lead_rules() {
    let base = json!({"name": "Al", "email": "a@b.com", "consent": true});
    assert!(default_registry().validate("Lead", &base).is_ok());

    let mut doc = base.clone();
    doc["name"] = json!("A");
    assert_field_fails("Lead", doc, "name", Rule::MinLength);

    let mut doc = base.clone();
    doc["email"] = json!("not-an-email");
    assert_field_fails("Lead", doc, "email", Rule::Format);

    let mut doc = base.clone();
    doc["timeline"] = json!("next week");
    assert_field_fails("Lead", doc, "timeline", Rule::OneOf);

    let out = default_registry().validate("Lead", &base).unwrap();
    assert!(!out.contains_key("timeline"));

    let mut doc = base;
    doc.as_object_mut().unwrap().remove("consent");
    assert_field_fails("Lead", doc, "consent", Rule::Missing);
}

#[test]
fn test_describe_idempotent() {
    let registry = default_registry();
    assert_eq!(
        registry.describe().to_json().to_string(),
        registry.describe().to_json().to_string()
    );
}

#[test]
fn test_unknown_type_rejected() {
    let err = default_registry().validate("Invoice", &json!({})).unwrap_err();
    assert!(err.is_unknown_type());
}

#[test]
fn test_collection_names() {
    assert_eq!(default_registry().collection_for("User").unwrap(), "user");

    let registry = SchemaRegistry::builder()
        .register(
            RecordType::new("BlogPost")
                .with_collection("blogs")
                .field(FieldDescriptor::text("title")),
        )
        .build()
        .unwrap();
    let description = registry.describe();
    assert_eq!(description.records[0].collection, "blogs");
    assert!(description.to_json().get("blogs").is_some());

    let out = registry
        .validate_collection("blogs", &json!({"title": "Hello"}))
        .unwrap();
    assert_eq!(out["title"], json!("Hello"));
}
