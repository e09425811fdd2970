/**
 * Blog Server Entry Point
 *
 * This is the main entry point for the blog backend server.
 * It loads configuration, initializes tracing and serves the Axum app.
 */

use blogcore::backend::server::create_app;
use blogcore::shared::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // A missing signing secret is fatal
    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!("Invalid server configuration: {}", e);
        e
    })?;
    tracing::info!(?config, "Configuration loaded");

    let app = create_app(&config).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
