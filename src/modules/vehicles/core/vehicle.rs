use serde::{Deserialize, Serialize};

/// A vehicle as held by the store and returned over the wire.
///
/// Missing fields decode to their zero value, so seed files and request bodies
/// may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i64,
}

/// The client supplied part of a vehicle. Any `id` in the body is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VehicleDraft {
    pub make: String,
    pub model: String,
    pub year: i64,
}

impl VehicleDraft {
    /// Decodes the first JSON value in `bytes`; anything after it is ignored.
    /// `null` is the zero draft. An empty body is an error.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Option<Self>>()
            .next()
        {
            Some(draft) => Ok(draft?.unwrap_or_default()),
            None => Err(serde::de::Error::custom("empty request body")),
        }
    }

    pub fn into_vehicle(self, id: impl Into<String>) -> Vehicle {
        Vehicle {
            id: id.into(),
            make: self.make,
            model: self.model,
            year: self.year,
        }
    }
}

impl Vehicle {
    /// Numeric value of the identifier, if it is one.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }
}
