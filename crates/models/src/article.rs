use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::query::Filter;
use crate::resource::{default_true, Identity, Resource, SingleLookup};

pub const DEFAULT_AUTHOR: &str = "Admin";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(with = "codec::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticleCreate {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_true")]
    pub published: bool,
}

fn default_author() -> String { DEFAULT_AUTHOR.to_string() }

impl Resource for Article {
    type Create = ArticleCreate;
    const COLLECTION: &'static str = "articles";
    const KIND: &'static str = "Article";

    fn id(&self) -> &str { &self.id }

    fn build(input: ArticleCreate, identity: Identity) -> Self {
        Self {
            id: identity.id,
            title: input.title,
            content: input.content,
            excerpt: input.excerpt,
            image_url: input.image_url,
            author: input.author,
            published: input.published,
            created_at: identity.created_at,
        }
    }

    /// Drafts never show up in listings.
    fn visibility() -> Filter { Filter::new().eq("published", true) }
}

impl SingleLookup for Article {}
