use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tessen_app::app::api::{DAV_ROUTE_PREFIX, routes};
use tessen_app::bridge_handler::BridgeHandler;
use tessen_core::config::load_config;
use tessen_service::dav::FsBridge;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Tessen WebDAV server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    tokio::fs::create_dir_all(&config.storage.root).await?;
    let bridge = FsBridge::new(&config.storage.root).with_mount(DAV_ROUTE_PREFIX);

    tracing::info!(root = %config.storage.root.display(), "Serving storage root");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(BridgeHandler {
            bridge: Arc::new(bridge),
        })
        .push(routes(&config)?);

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
