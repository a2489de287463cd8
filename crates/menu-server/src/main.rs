use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use menu_server::config::Settings;
use menu_server::state::{build_provider, AppState};
use menu_server::utils::init_logger;
use menu_server::{build_router, shutdown_signal};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::load()?;

    // Initialize logging
    init_logger(&settings.logging)?;

    info!("🚀 Starting menu server...");

    // One-shot catalog load; a failure leaves the menu page unavailable
    let provider = build_provider(&settings.catalog)?;
    let state = Arc::new(AppState::load(provider.as_ref()).await);
    info!("✅ Catalog source: {}", state.source);

    let app = build_router(state);

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    let listener = TcpListener::bind(addr).await?;
    info!("🎯 Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}
