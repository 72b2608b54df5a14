use async_trait::async_trait;
use chrono::Utc;
use models::{document, query::ID, Document, Filter};
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};
use serde_json::Value;
use tracing::error;

use super::{document_id, DocumentStore};
use crate::errors::ServiceError;

/// Postgres document store: one `document` row per entity, body kept as JSONB.
#[derive(Clone)]
pub struct SeaOrmDocumentStore {
    pub db: DatabaseConnection,
}

impl SeaOrmDocumentStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Bring the `document` table up to date.
    pub async fn migrate(&self) -> Result<(), ServiceError> {
        use migration::MigratorTrait;
        migration::Migrator::up(&self.db, None).await?;
        Ok(())
    }

    fn select(collection: &str, filter: &Filter) -> Select<document::Entity> {
        let mut finder = document::Entity::find().filter(document::Column::Collection.eq(collection));
        for (field, value) in filter.iter() {
            finder = match (field, value) {
                // ids live in their own indexed column
                (ID, Value::String(id)) => finder.filter(document::Column::DocId.eq(id.as_str())),
                _ => {
                    let mut probe = serde_json::Map::new();
                    probe.insert(field.to_string(), value.clone());
                    finder.filter(Expr::cust_with_values(r#""body" @> $1"#, [Value::Object(probe)]))
                }
            };
        }
        finder.order_by_asc(document::Column::Seq)
    }
}

#[async_trait]
impl DocumentStore for SeaOrmDocumentStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), ServiceError> {
        let doc_id = document_id(&doc)?.to_string();
        let am = document::ActiveModel {
            seq: NotSet,
            collection: Set(collection.to_string()),
            doc_id: Set(doc_id),
            body: Set(Value::Object(doc)),
            inserted_at: Set(Utc::now().into()),
        };
        document::Entity::insert(am).exec(&self.db).await.map_err(|e| {
            error!(collection, err = %e, "document insert failed");
            ServiceError::from(e)
        })?;
        Ok(())
    }

    async fn find(&self, collection: &str, filter: &Filter, limit: u64) -> Result<Vec<Document>, ServiceError> {
        let rows = Self::select(collection, filter)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!(collection, err = %e, "document query failed");
                ServiceError::from(e)
            })?;
        rows.into_iter()
            .map(|row| match row.body {
                Value::Object(doc) => Ok(doc),
                other => Err(ServiceError::Db(format!("document {} has a non-object body: {other}", row.doc_id))),
            })
            .collect()
    }
}
