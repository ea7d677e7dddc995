use animenext::{config::Config, routes::create_router, services::JikanClient, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,animenext=debug")),
        )
        .init();

    // Load configuration and build the upstream client
    let config = Config::from_env()?;
    let state = AppState::new(JikanClient::new(config.jikan_api_url.clone()));

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Anime recommendations server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
