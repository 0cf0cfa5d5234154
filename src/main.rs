//! Standalone server entrypoint.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use serverless_proxy::{config, AppContext, HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "serverless_proxy=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::from_env()?;
    tracing::info!(
        bind_address = %config.listener.bind_address,
        api_command = %config.backend.command,
        static_root = %config.static_files.root.display(),
        "Configuration loaded"
    );

    // One-time initialization: API server first, traffic only when ready.
    let AppContext { router, process } = AppContext::initialize(&config).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.install_ctrl_c();

    let server = HttpServer::new(&config, Arc::new(router));
    server.run(listener, server_shutdown).await?;

    process.shutdown().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
