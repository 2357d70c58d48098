//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are the crates'
//! own enums rendered through `kernel::error::AppError`.

mod app;
mod config;

use auth::{InMemoryUserRepository, PgUserRepository};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tasks::{InMemoryTaskRepository, PgTaskRepository};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{build_app, cors_layer};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tasks=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let auth_config = Arc::new(config.auth);

    let app = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_app(
                PgUserRepository::new(pool.clone()),
                PgTaskRepository::new(pool),
                auth_config,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, data is kept in memory and lost on exit");
            build_app(
                InMemoryUserRepository::new(),
                InMemoryTaskRepository::new(),
                auth_config,
            )
        }
    };

    let app = app.layer(cors_layer(config.cors_origins));

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
