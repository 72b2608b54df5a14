//! Real listener + HTTP client, against the in-memory store and, when
//! `DATABASE_URL` is set (and `SKIP_DB_TESTS` is not), against Postgres.

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};
use service::{Catalog, DocumentStore, FileDocumentStore, SeaOrmDocumentStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{build_router, AppState};

struct TestApp {
    base_url: String,
}

async fn start_server(store: Arc<dyn DocumentStore>) -> anyhow::Result<TestApp> {
    let app = build_router(AppState { catalog: Catalog::new(store) }, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()) })
}

async fn postgres_store() -> anyhow::Result<Option<Arc<dyn DocumentStore>>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = models::db::connect().await?;
    let store = SeaOrmDocumentStore::new(db);
    store.migrate().await?;
    Ok(Some(Arc::new(store)))
}

async fn product_roundtrip(app: &TestApp) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let name = format!("Router {}", uuid::Uuid::new_v4());
    let res = client
        .post(format!("{}/api/products", app.base_url))
        .json(&json!({
            "name": name,
            "description": "Mikrotik",
            "category": "network",
            "price": 1250000.5,
            "image_url": "",
            "in_stock": false
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();

    let res = client.get(format!("{}/api/products/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await?;
    assert_eq!(fetched["name"], name.as_str());
    assert_eq!(fetched["in_stock"], false);
    assert_eq!(fetched["created_at"], created["created_at"]);

    let list: Vec<Value> = client.get(format!("{}/api/products", app.base_url)).send().await?.json().await?;
    assert!(list.iter().any(|p| p["id"] == id.as_str()));
    Ok(())
}

#[tokio::test]
async fn e2e_memory_store() -> anyhow::Result<()> {
    let app = start_server(FileDocumentStore::in_memory()).await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    product_roundtrip(&app).await
}

#[tokio::test]
async fn e2e_file_store_survives_restart() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("teskom_e2e_{}", uuid::Uuid::new_v4()));
    let first = start_server(FileDocumentStore::open(&dir).await?).await?;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/services", first.base_url))
        .json(&json!({"name": "Backup", "description": "Harian", "icon": "disk", "features": ["NAS"]}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let second = start_server(FileDocumentStore::open(&dir).await?).await?;
    let list: Vec<Value> = client.get(format!("{}/api/services", second.base_url)).send().await?.json().await?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Backup");

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}

#[tokio::test]
async fn e2e_postgres_store() -> anyhow::Result<()> {
    let Some(store) = postgres_store().await? else { return Ok(()) };
    let app = start_server(store).await?;
    product_roundtrip(&app).await
}
