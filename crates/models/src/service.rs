use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::resource::{Identity, Resource};

/// A service offering shown on the services page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

impl Resource for Service {
    type Create = ServiceCreate;
    const COLLECTION: &'static str = "services";
    const KIND: &'static str = "Service";

    fn id(&self) -> &str { &self.id }

    fn build(input: ServiceCreate, identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: input.name,
            description: input.description,
            icon: input.icon,
            features: input.features,
            created_at: identity.created_at,
        }
    }
}
