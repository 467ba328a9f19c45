use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` (or `CONFIG_PATH`) first; only a missing file falls back to the environment.
pub fn load_config() -> Result<AppConfig, StartupError> {
    load_config_from(&configs::config_path())
}

pub fn load_config_from(path: &str) -> Result<AppConfig, StartupError> {
    let mut cfg = match configs::load_from_file(path) {
        Ok(cfg) => cfg,
        Err(e) if is_missing_file(&e) => {
            warn!(path, "config file not found, reading settings from environment");
            AppConfig::from_env()
        }
        Err(e) => return Err(StartupError::InvalidConfig(format!("{path}: {e}"))),
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?;
    Ok(cfg)
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

/// Connect the pool and bring the schema up to date when configured to.
pub async fn build_state(cfg: &DatabaseConfig) -> Result<ServerState, StartupError> {
    let db = models::db::connect_with_config(cfg).await?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Runtime(format!("migration failed: {e}")))?;
        info!("database migrations applied");
    }
    Ok(ServerState::new(db))
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
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
                warn!(error = %e, "failed to install SIGTERM handler");
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
    info!("shutdown signal received, draining connections");
}

/// Serve until Ctrl+C or SIGTERM; in-flight requests finish before returning.
pub async fn run_with_config(cfg: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&cfg.database).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))?;
    info!(%addr, "site registry listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    Ok(())
}

/// Public entry: load configuration, build the app and run the HTTP server.
pub async fn run() -> Result<(), StartupError> {
    let cfg = load_config()?;
    run_with_config(cfg).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));

        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 9000;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 9000);
    }

    fn write_config(name: &str, body: &str) -> String {
        let path = std::env::temp_dir().join(format!("site_registry_{}_{}.toml", std::process::id(), name));
        std::fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn invalid_config_file_is_rejected_not_replaced() {
        let path = write_config("bad_port", "[server]\nhost = \"0.0.0.0\"\nport = 0\n[database]\nurl = \"sqlite::memory:\"\n");
        assert!(matches!(load_config_from(&path), Err(StartupError::InvalidConfig(_))));

        let path = write_config("bad_url", "[server]\nhost = \"0.0.0.0\"\nport = 9001\n[database]\nurl = \"mysql://x/y\"\n");
        assert!(matches!(load_config_from(&path), Err(StartupError::InvalidConfig(_))));

        let path = write_config("unparsable", "[server\nport = ");
        assert!(matches!(load_config_from(&path), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn valid_config_file_is_used_as_written() {
        let path = write_config("ok", "[server]\nhost = \"0.0.0.0\"\nport = 9002\n[database]\nurl = \"sqlite::memory:\"\n");
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9002);
        assert_eq!(cfg.database.url, "sqlite::memory:");
    }

    #[test]
    fn only_missing_file_counts_as_absent() {
        let missing = configs::load_from_file("/nonexistent/site_registry.toml").unwrap_err();
        assert!(is_missing_file(&missing));
        let unparsable = configs::parse("[server").unwrap_err();
        assert!(!is_missing_file(&unparsable));
    }

    #[tokio::test]
    async fn build_state_migrates_in_memory_database() {
        let cfg = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let state = build_state(&cfg).await.unwrap();
        assert!(state.sites.retrieve_all_sites().await.unwrap().is_empty());
    }
}
