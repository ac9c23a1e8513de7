//! Animal record as returned by the remote catalog.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Age classification the catalog uses for older animals.
pub const SENIOR_AGE: &str = "Senior";

/// Opaque attribute map for one animal.
///
/// No schema is imposed beyond the accessors the service needs; the full object
/// is passed through to callers untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalRecord(Map<String, Value>);

impl AnimalRecord {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Age classification string (`Baby`, `Young`, `Adult`, `Senior`).
    pub fn age(&self) -> Option<&str> {
        self.0.get("age").and_then(Value::as_str)
    }

    /// Exact, case-sensitive match on [`SENIOR_AGE`].
    pub fn is_senior(&self) -> bool {
        self.age() == Some(SENIOR_AGE)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for AnimalRecord {
    fn from(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }
}
