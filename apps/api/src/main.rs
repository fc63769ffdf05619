mod config;
mod db;
mod errors;
mod feedback;
mod models;
mod questions;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::feedback::engine::{FeedbackEngine, HeuristicFeedbackEngine};
use crate::feedback::store::{FeedbackStore, InMemoryFeedbackStore, PgFeedbackStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting Coach API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn FeedbackStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, config.db_max_connections).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgFeedbackStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; feedback history is kept in memory only");
            Arc::new(InMemoryFeedbackStore::new())
        }
    };

    let engine: Arc<dyn FeedbackEngine> = Arc::new(HeuristicFeedbackEngine);
    info!("Feedback engine initialized (backend: {})", engine.backend());

    let state = AppState {
        config: config.clone(),
        engine,
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
