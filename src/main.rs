use school_api::{app, Config};
use sqlx::sqlite::SqlitePool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting school api server...");

    let config = Config::from_env()?;

    // Connections are checked out per request and returned on drop
    let pool = SqlitePool::connect(&config.database_url).await?;

    tracing::info!("Database connection established.");

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(pool))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
