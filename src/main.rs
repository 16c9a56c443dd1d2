//! Melomood service - Entry Point

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use melomood::config::{AppConfig, StorageMode};
use melomood::server::{self, AppState, BoxedStore};
use melomood::storage::{FileEventStore, MemoryEventStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging();

    info!("Starting melomood service");

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config from environment: {e}, using defaults");
        AppConfig::default()
    });

    info!(
        storage = %config.storage.mode,
        port = config.server.port,
        "Configuration loaded"
    );

    // Open the mood event store
    let store: BoxedStore = match config.storage.mode {
        StorageMode::Memory => Box::new(MemoryEventStore::new()),
        StorageMode::File => Box::new(
            FileEventStore::new(&config.storage.data_dir)
                .context("Failed to open mood event store")?,
        ),
    };

    // Create app state
    let state = AppState::new(config.clone(), store);

    // Reap idle quiz sessions in the background
    server::spawn_session_cleanup_task(state.sessions.clone());

    // Create router
    let app = server::create_router(state);

    // Bind to socket
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(%addr, "Server listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber for logging
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "melomood=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
