//! Create `document` table.
//!
//! Every entity family lives in this one table, keyed by `collection`. The
//! entity itself is kept verbatim in `body` (JSONB); `seq` preserves insertion order.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn document_table() -> TableCreateStatement {
    Table::create()
        .table(Document::Table)
        .if_not_exists()
        .col(big_integer(Document::Seq).auto_increment().primary_key())
        .col(string_len(Document::Collection, 64).not_null())
        .col(string_len(Document::DocId, 64).not_null())
        .col(json_binary(Document::Body).not_null())
        .col(timestamp_with_time_zone(Document::InsertedAt).not_null())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(document_table()).await?;

        // Exact id lookups within a collection
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_document_collection_doc_id")
                    .table(Document::Table)
                    .col(Document::Collection)
                    .col(Document::DocId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Ordered collection scans
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_document_collection_seq")
                    .table(Document::Table)
                    .col(Document::Collection)
                    .col(Document::Seq)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Document::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Document {
    Table,
    Seq,
    Collection,
    DocId,
    Body,
    InsertedAt,
}
