#![cfg(test)]
use std::sync::Arc;

use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_with_config;
use configs::DatabaseConfig;

use crate::catalog::Catalog;
use crate::storage::FileDocumentStore;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Postgres-backed tests need `DATABASE_URL`; `SKIP_DB_TESTS` turns them off explicitly.
pub fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}

fn db_config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig { url: std::env::var("DATABASE_URL").unwrap_or_default(), ..DatabaseConfig::default() };
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout_secs = 10;
    cfg
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&db_config()).await?;
            migration::Migrator::up(&db, None).await?;
            drop(db);
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Return a fresh connection for the current test's runtime
    connect_with_config(&db_config()).await
}

/// Catalog over a fresh in-memory store.
pub fn memory_catalog() -> Catalog {
    Catalog::new(FileDocumentStore::in_memory())
}

pub fn memory_store() -> Arc<FileDocumentStore> {
    FileDocumentStore::in_memory()
}
