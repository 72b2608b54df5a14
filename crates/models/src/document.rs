use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row of the Postgres-backed document store. `body` holds the stored entity as-is.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i64,
    pub collection: String,
    pub doc_id: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub body: Json,
    pub inserted_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
