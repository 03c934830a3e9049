use accounts_backend::{config::AppConfig, create_router, initialize_backend, serve, shutdown_signal};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::parse();
    let addr = config.socket_addr()?;

    let app_state = initialize_backend(&config);
    let app = create_router(app_state);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    serve(listener, app, shutdown_signal(), config.shutdown_timeout()).await?;

    info!("Server stopped");
    Ok(())
}
