use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use dotenvy::dotenv;
use models::db::{connect_with_config, test_connection, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the config file when it exists, otherwise fall back to env vars.
/// A file that exists but does not parse or validate is an error.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = configs::config_path();
    if Path::new(&path).exists() {
        return AppConfig::load_and_validate()
            .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")));
    }
    let cfg = AppConfig::from_env();
    cfg.database
        .validate()
        .map_err(|e| StartupError::InvalidConfig(format!("{e} (no config file at {path})")))?;
    Ok(cfg)
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown signal disabled");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, draining connections");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = load_config()?;
    init_logging(LogFormat::parse(&cfg.logging.format));
    info!(config_path = %configs::config_path(), "configuration loaded");

    // DB connection pool shared by all handlers
    let db_cfg: DatabaseConfig = cfg.database.clone().into();
    let db = connect_with_config(&db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    test_connection(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    let state = AppState::from_db(db);
    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting trivia api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
