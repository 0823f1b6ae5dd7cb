//! Typed keys shared across the SDK.
//!
//! Keys are thin newtypes over strings. They exist so an experiment key can
//! never be handed to an API expecting a variation key, and so `Display`
//! and serde behave uniformly everywhere.

use serde::{Deserialize, Serialize};

/// Key identifying an experiment in the active configuration
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentKey(pub String);

impl ExperimentKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ExperimentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key identifying one treatment arm within an experiment
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariationKey(pub String);

impl VariationKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for VariationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for the user a forced variation applies to
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct_types() {
        let exp = ExperimentKey::new("checkout_flow");
        let var = VariationKey::new("treatment");

        assert_eq!(exp.as_str(), "checkout_flow");
        assert_eq!(var.to_string(), "treatment");
    }

    #[test]
    fn test_serde_transparent() {
        let key = ExperimentKey::new("exp1");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"exp1\"");

        let back: ExperimentKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
