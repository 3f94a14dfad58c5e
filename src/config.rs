//! Validator configuration.
//!
//! Defaults match the viewer's expectations: undeclared fields are dropped
//! and values are coerced to their declared types where unambiguous.

use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the [`UnknownFieldPolicy`].
pub const ENV_UNKNOWN_FIELDS: &str = "FLAMES_SCHEMA_UNKNOWN_FIELDS";
/// Environment variable enabling strict (no coercion) mode.
pub const ENV_STRICT: &str = "FLAMES_SCHEMA_STRICT";

/// What to do with document keys that no field declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    /// Drop them from the normalized document
    #[default]
    Ignore,
    /// Copy them through unchanged
    Allow,
    /// Report each one as a violation
    Forbid,
}

impl UnknownFieldPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Some(UnknownFieldPolicy::Ignore),
            "allow" => Some(UnknownFieldPolicy::Allow),
            "forbid" => Some(UnknownFieldPolicy::Forbid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub unknown_fields: UnknownFieldPolicy,
    /// Disable coercion: values must already have their declared JSON type.
    pub strict: bool,
}

impl ValidatorConfig {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    /// Load overrides from the process environment.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_UNKNOWN_FIELDS) {
            match UnknownFieldPolicy::parse(&raw) {
                Some(policy) => config.unknown_fields = policy,
                None => log::warn!(
                    "CONFIG_INVALID var={} value={:?} fallback={:?}",
                    ENV_UNKNOWN_FIELDS,
                    raw,
                    config.unknown_fields
                ),
            }
        }

        if let Some(raw) = lookup(ENV_STRICT) {
            match raw.trim().to_lowercase().as_str() {
                "true" | "1" => config.strict = true,
                "false" | "0" => config.strict = false,
                _ => log::warn!(
                    "CONFIG_INVALID var={} value={:?} fallback={}",
                    ENV_STRICT,
                    raw,
                    config.strict
                ),
            }
        }

        log::debug!(
            "CONFIG_LOADED unknown_fields={:?} strict={}",
            config.unknown_fields,
            config.strict
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Ignore);
        assert!(!config.strict);
    }

    #[test]
    fn test_from_lookup() {
        let config = ValidatorConfig::from_lookup(lookup(&[
            (ENV_UNKNOWN_FIELDS, "Forbid"),
            (ENV_STRICT, "1"),
        ]));
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Forbid);
        assert!(config.strict);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ValidatorConfig::from_lookup(lookup(&[
            (ENV_UNKNOWN_FIELDS, "sometimes"),
            (ENV_STRICT, "maybe"),
        ]));
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"unknown_fields": "allow"}"#).unwrap();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Allow);
        assert!(!config.strict);
    }
}
