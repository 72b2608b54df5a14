use std::{env, time::Duration};

use anyhow::anyhow;
use configs::DatabaseConfig;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// `DATABASE_URL` from the environment (after `.env`), if any.
static ENV_DATABASE_URL: Lazy<Option<String>> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").ok().filter(|u| !u.trim().is_empty())
});

/// The configured url wins; otherwise the environment. No built-in fallback.
fn resolve_url(configured: &str, from_env: Option<&str>) -> anyhow::Result<String> {
    if !configured.trim().is_empty() {
        return Ok(configured.to_string());
    }
    from_env
        .map(str::to_string)
        .ok_or_else(|| anyhow!("no database url: set [database].url or DATABASE_URL"))
}

/// Connect using `DATABASE_URL` alone.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let url = resolve_url("", ENV_DATABASE_URL.as_deref())?;
    let db = Database::connect(url).await?;
    Ok(db)
}

/// Connect with pool sizing and timeouts taken from `[database]`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let url = resolve_url(&cfg.url, ENV_DATABASE_URL.as_deref())?;
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(max_connections = cfg.max_connections, min_connections = cfg.min_connections, "database pool ready");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::resolve_url;

    #[test]
    fn configured_url_beats_environment() {
        let url = resolve_url("postgres://cfg@db/teskom", Some("postgres://env@db/teskom")).unwrap();
        assert_eq!(url, "postgres://cfg@db/teskom");
        assert_eq!(resolve_url("  ", Some("postgres://env@db/teskom")).unwrap(), "postgres://env@db/teskom");
    }

    #[test]
    fn missing_url_is_an_error_not_a_default() {
        assert!(resolve_url("", None).is_err());
    }
}
