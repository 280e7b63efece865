/// Server setup and initialization
///
/// Wires together the document store, the injected handler state and the
/// HTTP routes. The store lives exactly as long as `start_server`.

use crate::{
    api::{create_api_routes, AppState},
    config::Config,
    store::Database,
};
use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;

/// Build the router for an already wired state
///
/// Kept separate from `create_app` so tests can serve any container pair.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        // Health check endpoint
        .route("/healthz", get(health_check))
        .merge(create_api_routes().with_state(state))
}

/// Open the document store and create the main Axum application
///
/// Returns the database handle too so the caller controls its shutdown.
pub async fn create_app(config: &Config) -> Result<(Router, Database)> {
    config.validate()?;

    tracing::info!("🏗️ Initializing document store");
    let database = Database::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize document store: {}", e))?;

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = build_router(AppState::from(&database));

    tracing::info!("✅ Application initialized successfully");
    Ok((app, database))
}

/// Start the HTTP server with the given configuration
///
/// Serves until Ctrl-C / SIGTERM, then closes the store.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting Gestor API server...");

    let (app, database) = create_app(&config).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    let served = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;

    database.close().await;
    served?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("❌ Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("❌ Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received");
}

/// Root greeting
async fn home() -> &'static str {
    "Hello World"
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
