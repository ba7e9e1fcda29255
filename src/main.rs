/**
 * Tickbox Server Entry Point
 *
 * Boots the todo backend: environment, logging, configuration, database,
 * router, listener — in that order, failing fast if any step cannot
 * complete.
 */

use tickbox::server::config::AppConfig;
use tickbox::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("tickbox=debug,tower_http=debug")
            }),
        )
        .init();

    let config = AppConfig::from_env()?;
    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
