use parser_service::{server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.clone())
        .init();

    tracing::info!("Parser service starting");
    tracing::info!("Port: {}", config.port);

    // Build HTTP server
    let app = server::build_router();

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Parser service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
