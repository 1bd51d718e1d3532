//! University results HTTP/JSON gateway binary.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unires_client::Client;
use unires_gateway::{create_router, AppState, Args, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "unires_gateway=info,unires_client=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line args
    let args = Args::parse();
    let config = GatewayConfig::from(&args);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.listen_addr,
        db = %config.db_path.display(),
        "starting results gateway"
    );

    // Open the store with a connection pool
    let client = Client::connect(config.pool_config()).await?;
    client.ping().await?;
    info!(
        min_connections = config.pool_min_connections,
        max_connections = config.pool_max_connections,
        acquire_timeout_ms = config.pool_acquire_timeout.as_millis(),
        "connected to results store"
    );

    // Create router
    let state = AppState::new(client.clone());
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("gateway listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    client.close();
    info!("gateway shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl+c");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
