use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::CoreError;

pub const MOVES_FIELD: &str = "moves";

/// One decoded response from the board endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sample {
    value: Value,
}

impl Sample {
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    pub fn from_json(body: &str) -> Result<Self, CoreError> {
        Ok(Self::from_value(serde_json::from_str(body)?))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The number of moves the board needs to be solved.
    pub fn moves(&self) -> Result<u32, CoreError> {
        let raw = self
            .value
            .get(MOVES_FIELD)
            .ok_or_else(|| CoreError::MissingField(MOVES_FIELD.into()))?;
        raw.as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| CoreError::InvalidField {
                field: MOVES_FIELD.into(),
                value: raw.to_string(),
            })
    }

    pub fn canonical(&self) -> String {
        canonical_json(&self.value)
    }

    /// Short SHA-256 prefix of the canonical form, for console output.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.canonical().as_bytes());
        digest[..6].iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Compact JSON with object keys sorted at every depth. Array order is kept.
pub fn canonical_json(value: &Value) -> String {
    sorted(value).to_string()
}

fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut out = Map::new();
            for (k, v) in entries {
                out.insert(k.clone(), sorted(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}
