/// Gestor API server entry point
///
/// Loads configuration from the environment and serves:
/// - User management at /users/*
/// - Project management at /projects/* and /users/{id}/projects
/// - Health check at /healthz

use gestor::{config::Config, server::start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to 0.0.0.0:8000 and sqlite://data/gestor_proyectos.db
    let config = Config::default();

    start_server(config).await
}
