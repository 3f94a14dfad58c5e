//! Record type name to collection name policy.

/// Resolve the collection a record type validates documents for.
///
/// The explicit override wins; otherwise the type name is lower-cased.
///
/// # Examples
/// ```
/// use flames_schemas::schema::naming::collection_name;
/// assert_eq!(collection_name("User", None), "user");
/// assert_eq!(collection_name("BlogPost", Some("blogs")), "blogs");
/// ```
pub fn collection_name(type_name: &str, collection_override: Option<&str>) -> String {
    match collection_override {
        Some(name) => name.to_string(),
        None => type_name.to_lowercase(),
    }
}
