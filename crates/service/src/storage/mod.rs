//! Document store abstraction and its backends.
//!
//! A store keeps schema-free documents in named collections and answers
//! exact-match queries. Reads return documents in insertion order.

use async_trait::async_trait;
use models::{Document, Filter};

use crate::errors::ServiceError;

pub mod file_store;
pub mod seaorm_store;

pub use file_store::FileDocumentStore;
pub use seaorm_store::SeaOrmDocumentStore;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append one document. It must carry a string `id`.
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), ServiceError>;

    /// Up to `limit` documents matching `filter`, oldest first.
    async fn find(&self, collection: &str, filter: &Filter, limit: u64) -> Result<Vec<Document>, ServiceError>;

    /// First document matching `filter`.
    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, ServiceError> {
        Ok(self.find(collection, filter, 1).await?.into_iter().next())
    }
}

/// The `id` of a document about to be stored.
pub(crate) fn document_id(doc: &Document) -> Result<&str, ServiceError> {
    doc.get(models::query::ID)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ServiceError::Validation("document is missing a string `id`".into()))
}
