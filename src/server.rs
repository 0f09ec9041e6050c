//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, settings backend selection and the Axum
//! server lifecycle.

use crate::config::{Config, SettingsBackend};
use crate::domain::repositories::SettingsStore;
use crate::infrastructure::kv::RedisSettingsStore;
use crate::infrastructure::memory::MemorySettingsStore;
use crate::infrastructure::persistence::{
    PgContentRepository, PgSettingsStore, PgTokenRepository,
};
use crate::routes::app_router;
use crate::state::{AppState, StateOptions};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    Ok(pool)
}

/// Builds the settings store selected by `SETTINGS_BACKEND`.
///
/// # Errors
///
/// Returns an error if the Redis backend is selected and unreachable.
pub async fn settings_store(
    config: &Config,
    pool: Arc<PgPool>,
) -> Result<Arc<dyn SettingsStore>> {
    let store: Arc<dyn SettingsStore> = match config.settings_backend {
        SettingsBackend::Postgres => Arc::new(PgSettingsStore::new(pool)),
        SettingsBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("SETTINGS_BACKEND=redis requires REDIS_URL")?;
            Arc::new(
                RedisSettingsStore::connect(url)
                    .await
                    .context("Failed to connect to Redis")?,
            )
        }
        SettingsBackend::Memory => {
            tracing::warn!("Settings are kept in memory and will be lost on restart");
            Arc::new(MemorySettingsStore::new())
        }
    };
    tracing::info!("Settings backend: {:?}", config.settings_backend);
    Ok(store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Settings store (PostgreSQL, Redis or memory)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The settings backend is unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);
    let settings = settings_store(&config, pool.clone()).await?;
    let content = Arc::new(PgContentRepository::new(pool.clone()));
    let tokens = Arc::new(PgTokenRepository::new(pool));

    let state = AppState::new(content, settings, tokens, StateOptions::from_config(&config)?);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
