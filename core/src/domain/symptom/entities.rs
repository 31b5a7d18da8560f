use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A reported physical or mental state label, e.g. "Headache".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Symptom(String);

impl Symptom {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Symptom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symptom {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symptom {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A candidate health condition name, e.g. "Common Cold".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Condition {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A condition together with the number of selected symptoms voting for it.
/// Recomputed on every selection change, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoredCondition {
    pub condition: Condition,
    pub votes: u32,
}
