mod app;
mod config;
mod db;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::{DbConfig, ServerConfig};
use crate::logging::LoggingConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(&LoggingConfig::from_env());

    let db_config = DbConfig::from_env();
    let server_config = ServerConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(db_config.pool_size)
        .acquire_timeout(db_config.acquire_timeout)
        .connect_with(db_config.connect_options())
        .await
        .context("database pool initialization failed")?;

    db::bootstrap::run(&pool)
        .await
        .context("database bootstrap failed")?;
    tracing::info!("Database connection established");

    let state = AppState { pool: pool.clone() };
    let app = app::create_app(state);

    let listener = TcpListener::bind((server_config.host.as_str(), server_config.port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                server_config.host, server_config.port
            )
        })?;
    let addr = listener.local_addr()?;
    tracing::info!("Stock registry backend running at http://{}/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database connection pool closed");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
