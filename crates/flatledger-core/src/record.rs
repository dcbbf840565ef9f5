//! Flat record schema and its JSON encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A flat (property) record as stored on the ledger.
///
/// The key a flat is stored under lives outside the record. Missing fields
/// decode as empty strings, and all four fields are always encoded, so a
/// read-modify-write of one field never drops the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flat {
    /// Condition code.
    pub condition: String,

    /// String-encoded ranking (a timestamp or score).
    pub ranking: String,

    /// "lat, long" pair.
    pub location: String,

    /// Current holder name.
    pub holder: String,
}

impl Flat {
    /// Create a flat from its four fields.
    pub fn new(
        condition: impl Into<String>,
        ranking: impl Into<String>,
        location: impl Into<String>,
        holder: impl Into<String>,
    ) -> Self {
        Self {
            condition: condition.into(),
            ranking: ranking.into(),
            location: location.into(),
            holder: holder.into(),
        }
    }

    /// Get a field value.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Condition => &self.condition,
            RecordField::Ranking => &self.ranking,
            RecordField::Location => &self.location,
            RecordField::Holder => &self.holder,
        }
    }

    /// Overwrite a single field.
    pub fn set_field(&mut self, field: RecordField, value: impl Into<String>) {
        let slot = match field {
            RecordField::Condition => &mut self.condition,
            RecordField::Ranking => &mut self.ranking,
            RecordField::Location => &mut self.location,
            RecordField::Holder => &mut self.holder,
        };
        *slot = value.into();
    }

    /// Serialize the flat to its JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize a flat stored under `key`.
    pub fn from_bytes(key: &str, bytes: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(bytes).map_err(|e| Error::Decode {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// One of the four fields of a [`Flat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Condition,
    Ranking,
    Location,
    Holder,
}

impl RecordField {
    /// JSON name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Condition => "condition",
            RecordField::Ranking => "ranking",
            RecordField::Location => "location",
            RecordField::Holder => "holder",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
