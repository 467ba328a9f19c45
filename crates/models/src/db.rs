use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

pub use configs::DatabaseConfig;

/// Translate the pool settings from `config.toml` into sea-orm connect options.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    opt
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    tracing::info!(max = cfg.max_connections, min = cfg.min_connections, "database pool ready");
    Ok(db)
}

/// A private SQLite database living only as long as the returned connection.
///
/// The pool is pinned to one connection since every new `:memory:` connection
/// would open an empty database.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    connect_with_config(&cfg).await
}
