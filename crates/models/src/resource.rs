//! Shared behaviour of the stored entity families.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::query::Filter;

/// Server-assigned identity and provenance of a newly created entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Identity {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Fresh v4 UUID and the current instant, truncated to microseconds.
    pub fn fresh() -> Self {
        Self { id: Uuid::new_v4().to_string(), created_at: Utc::now().trunc_subsecs(6) }
    }
}

/// A stored entity family: its create shape, its collection and how it is built.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Client-supplied fields.
    type Create: DeserializeOwned + Send + 'static;

    /// Collection the documents live in.
    const COLLECTION: &'static str;
    /// Human-readable name used in messages, e.g. `"Product"`.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Assemble the stored shape from client fields and a server identity.
    fn build(input: Self::Create, identity: Identity) -> Self;

    /// Filter applied to list reads.
    fn visibility() -> Filter { Filter::new() }

    /// Stamp `input` with a fresh identity. Client values are taken as sent.
    fn create(input: Self::Create) -> Self {
        Self::build(input, Identity::fresh())
    }
}

/// Families that can be fetched one at a time by id.
pub trait SingleLookup: Resource {}

pub(crate) fn default_true() -> bool { true }
