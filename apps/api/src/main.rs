mod config;
mod errors;
mod models;
mod routes;
mod screening;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::role::RoleCatalog;
use crate::routes::build_router;
use crate::screening::pipeline::ScreeningPipeline;
use crate::screening::similarity::TfIdfScorer;
use crate::screening::verdict::VerdictEngine;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener API v{}", env!("CARGO_PKG_VERSION"));

    // Role catalog: built-in unless ROLE_CATALOG_PATH points at a JSON file
    let catalog = match &config.role_catalog_path {
        Some(path) => RoleCatalog::from_json_file(path)
            .with_context(|| format!("loading role catalog from {}", path.display()))?,
        None => RoleCatalog::builtin(),
    };
    info!("Role catalog loaded ({} roles)", catalog.roles().len());

    let verdict = VerdictEngine::new(config.accept_threshold);
    info!(
        "Screening pipeline ready (threshold {}, extraction timeout {:?})",
        verdict.threshold(),
        config.extraction_timeout
    );
    let pipeline = ScreeningPipeline::new(Arc::new(catalog), Arc::new(TfIdfScorer), verdict);

    let state = AppState {
        config: config.clone(),
        pipeline: Arc::new(pipeline),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the upload UI has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
