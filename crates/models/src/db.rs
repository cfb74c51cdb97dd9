use std::path::Path;
use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Connect using `config.toml` / `DATABASE_URL` / the local default, in that order.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let cfg = database_config_at(&configs::config_path())?;
    connect_with_config(&cfg).await
}

/// Database section of the file at `path`, env and default applied. A file
/// that exists but does not parse is an error; a missing file is not.
pub fn database_config_at(path: &str) -> anyhow::Result<DatabaseConfig> {
    let mut cfg = if Path::new(path).exists() {
        configs::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("failed to load {path}: {e}"))?
            .database
    } else {
        DatabaseConfig::default()
    };
    cfg.normalize_from_env();
    Ok(cfg)
}

/// Open a pooled connection. Every repository call checks a connection out
/// of this pool and returns it when the call completes.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    cfg.validate()?;
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database pool ready"
    );
    Ok(db)
}
