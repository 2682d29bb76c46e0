use anyhow::Context;
use codes_api::{config::Config, db, logging, routes, service::SqliteCodeService, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    logging::init(&config.logging.level);

    let conn = db::open_database(&config.database.path)?;
    db::init_database(&conn, config.database.seed).context("Failed to initialize database schema")?;

    if config.auth.tokens.is_empty() {
        warn!("No auth tokens configured; every /codes request will be rejected");
    }

    let state = AppState::new(
        Arc::new(SqliteCodeService::new(conn)),
        config.auth.tokens.clone(),
    );
    let app = routes::build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
