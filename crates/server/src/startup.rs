use std::{path::PathBuf, sync::Arc};

use axum::http::{HeaderValue, Method};
use configs::{AppConfig, CorsConfig, StorageBackend};
use service::{DocumentStore, FileDocumentStore, SeaOrmDocumentStore};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, AppState};

/// Open the configured document store, migrating Postgres when asked to.
pub async fn build_store(cfg: &AppConfig) -> Result<Arc<dyn DocumentStore>, StartupError> {
    match cfg.backend() {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            let store = SeaOrmDocumentStore::new(db);
            if cfg.storage.auto_migrate {
                store.migrate().await?;
                info!("document table migrated");
            }
            info!(backend = "postgres", "document store ready");
            Ok(Arc::new(store))
        }
        StorageBackend::File => {
            let dir = PathBuf::from(&cfg.storage.data_dir);
            let store = FileDocumentStore::open(&dir).await?;
            info!(backend = "file", data_dir = %dir.display(), "document store ready");
            Ok(store as Arc<dyn DocumentStore>)
        }
        StorageBackend::Memory => {
            warn!("memory document store selected; data is lost on restart");
            Ok(FileDocumentStore::in_memory())
        }
    }
}

/// `*` (or an empty list) allows any origin; otherwise only the listed ones, with credentials.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    if cfg.allows_any() {
        return Ok(CorsLayer::very_permissive());
    }
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| StartupError::InvalidConfig(format!("bad CORS origin {o:?}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Build the app from `cfg` and serve until ctrl-c or SIGTERM.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let store = build_store(&cfg).await?;
    let cors = build_cors(&cfg.cors)?;
    let state = AppState { catalog: service::Catalog::new(store) };
    let app = routes::build_router(state, cors);

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port))
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {}:{}: {e}", cfg.server.host, cfg.server.port)))?;
    let addr = listener.local_addr().map_err(anyhow::Error::from)?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(err = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(err = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
