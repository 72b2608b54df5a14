//! Conversion between entities and the documents handed to a document store.
//!
//! Stored documents carry `created_at` as an RFC 3339 / ISO-8601 UTC string.
//! `from_storage` also accepts the naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` form
//! (no offset), which is read as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::ModelError;

/// A schema-free record as exchanged with the store.
pub type Document = Map<String, Value>;

pub const CREATED_AT: &str = "created_at";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ModelError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ModelError::Codec(format!("invalid timestamp {raw:?}")))
}

/// Serde adapter for `created_at` fields.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Render an entity as a storable document; `created_at` becomes an ISO-8601 string.
pub fn to_storage<T: Serialize>(entity: &T) -> Result<Document, ModelError> {
    match serde_json::to_value(entity).map_err(|e| ModelError::Codec(e.to_string()))? {
        Value::Object(doc) => Ok(doc),
        other => Err(ModelError::Codec(format!("expected an object, got {other}"))),
    }
}

/// Rebuild an entity from a stored document. A string `created_at` is parsed
/// back into a timestamp; every other field passes through unchanged.
pub fn from_storage<T: DeserializeOwned>(mut doc: Document) -> Result<T, ModelError> {
    let canonical = match doc.get(CREATED_AT) {
        Some(Value::String(raw)) => Some(format_timestamp(&parse_timestamp(raw)?)),
        _ => None,
    };
    if let Some(ts) = canonical {
        doc.insert(CREATED_AT.to_string(), Value::String(ts));
    }
    serde_json::from_value(Value::Object(doc)).map_err(|e| ModelError::Codec(e.to_string()))
}
