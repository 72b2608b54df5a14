use anyhow::Result;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::codec::{from_storage, to_storage};
use crate::db::connect;
use crate::document;
use crate::product::{Product, ProductCreate};
use crate::resource::Resource;

fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}

#[tokio::test]
async fn test_document_row_round_trip() -> Result<()> {
    if !db_tests_enabled() { return Ok(()); }
    let db = connect().await?;
    Migrator::up(&db, None).await?;

    let collection = format!("products_test_{}", Uuid::new_v4().simple());
    let p = Product::create(ProductCreate {
        name: "MCB 3 Phase".into(),
        description: "Miniature circuit breaker".into(),
        category: "Proteksi".into(),
        price: 450000.0,
        image_url: "https://images.example.com/mcb.jpg".into(),
        in_stock: false,
    });
    let body = serde_json::Value::Object(to_storage(&p)?);

    let am = document::ActiveModel {
        seq: NotSet,
        collection: Set(collection.clone()),
        doc_id: Set(p.id.clone()),
        body: Set(body),
        inserted_at: Set(Utc::now().into()),
    };
    let row = am.insert(&db).await?;
    assert!(row.seq > 0);

    let found = document::Entity::find()
        .filter(document::Column::Collection.eq(collection.clone()))
        .order_by_asc(document::Column::Seq)
        .all(&db)
        .await?;
    assert_eq!(found.len(), 1);
    let serde_json::Value::Object(doc) = found[0].body.clone() else { panic!("body is not an object") };
    let back: Product = from_storage(doc)?;
    assert_eq!(back, p);

    document::Entity::delete_many()
        .filter(document::Column::Collection.eq(collection))
        .exec(&db)
        .await?;
    Ok(())
}
