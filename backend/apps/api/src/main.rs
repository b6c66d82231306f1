//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use api::config::{DatabaseTarget, ServerConfig};
use api::routes::{AppState, build_router, cors_layer};
use auth::domain::repository::UserRepository;
use auth::{InMemoryUserRepository, PgUserRepository};
use contacts::domain::repository::ContactRepository;
use contacts::{InMemoryContactRepository, PgContactRepository};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,contacts=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    match &config.database {
        DatabaseTarget::Memory => {
            tracing::warn!("Using in-memory stores, data is lost on exit");
            serve(
                &config,
                InMemoryUserRepository::new(),
                InMemoryContactRepository::new(),
            )
            .await
        }
        DatabaseTarget::Postgres(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(url)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Database connection failed"))
                .context("connecting to database")?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await
                .context("running migrations")?;

            tracing::info!("Migrations completed");

            serve(
                &config,
                PgUserRepository::new(pool.clone()),
                PgContactRepository::new(pool),
            )
            .await
        }
    }
}

async fn serve<U, C>(config: &ServerConfig, users: U, contacts: C) -> anyhow::Result<()>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: ContactRepository + Clone + Send + Sync + 'static,
{
    let state = AppState::new(users, contacts, &config.auth_config());
    let app = build_router(state, cors_layer(config.frontend_origins.as_deref()));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
