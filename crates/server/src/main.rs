mod handler;
mod middleware;

use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{config::Config, config::ConnectionManager, state::AppState};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::handler::AppRouter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let file_appender = tracing_appender::rolling::daily("logs", "admin-api.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    let config = Config::init().context("Failed to load configuration")?;

    let port = config.port;

    let pool = ConnectionManager::new_pool(&config.database_url, config.run_migrations)
        .await
        .context("Failed to create database pool")?;

    let state = AppState::new(pool, &config)
        .await
        .context("Failed to create AppState")?;

    println!("🚀 Server started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Server shut down");

    Ok(())
}
