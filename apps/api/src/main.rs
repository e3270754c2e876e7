mod config;
mod editor;
mod errors;
mod export;
mod extract;
mod models;
mod presentation;
mod render;
mod routes;
mod scoring;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::editor::session::EditorSession;
use crate::routes::build_router;
use crate::scoring::{ResumeScorer, RuleBasedScorer};
use crate::state::AppState;
use crate::store::build_store;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Persistence backend
    let store = build_store(&config).await?;

    // Scorer (rule-based by default)
    let scorer: Arc<dyn ResumeScorer> = Arc::new(RuleBasedScorer::default());
    info!("ATS scorer initialized ({} rules)", scorer.rules().len());

    // Hydrate the editing session from the store
    let session = EditorSession::load(store, scorer.clone()).await;
    info!("Session ready (current score: {})", session.score().score);

    let state = AppState {
        session: Arc::new(Mutex::new(session)),
        scorer,
        config: config.clone(),
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
