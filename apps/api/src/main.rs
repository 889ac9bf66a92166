mod clock;
mod config;
mod errors;
mod matching;
mod models;
mod notifications;
mod routes;
mod screening;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::clock::SystemClock;
use crate::config::Config;
use crate::matching::matcher::PreferenceMatcher;
use crate::matching::tables::MatchingTables;
use crate::notifications::{LogNotificationSink, NotificationDispatcher};
use crate::routes::build_router;
use crate::screening::engine::ScreeningEngine;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
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

    info!("Starting Recruit API v{}", env!("CARGO_PKG_VERSION"));

    // Matching tables: built-in unless a file is configured
    let tables = match &config.matching_tables_path {
        Some(path) => {
            let tables = MatchingTables::load(path)?;
            info!("Matching tables loaded from {}", path.display());
            tables
        }
        None => MatchingTables::default(),
    };
    info!(
        "Matching tables: {} regions, {} related-category entries, {} categories",
        tables.regions.len(),
        tables.related_categories.len(),
        tables.categories.len()
    );

    let matcher = Arc::new(PreferenceMatcher::from_tables(tables));
    let screening = Arc::new(ScreeningEngine::new(Arc::new(SystemClock)));

    // Notices go to the log until a delivery channel is configured
    let notifier = NotificationDispatcher::new(Arc::new(LogNotificationSink));

    // Build app state
    let state = AppState {
        config: config.clone(),
        screening,
        matcher,
        notifier,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
