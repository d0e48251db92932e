mod config;
mod errors;
mod extract;
mod models;
mod ner;
mod parser;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ner::RuleBasedTagger;
use crate::parser::skills::SkillsVocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvparse API v{}", env!("CARGO_PKG_VERSION"));

    // Skills vocabulary: curated default, or a newline-delimited file.
    let vocabulary = match &config.skills_vocab_path {
        Some(path) => SkillsVocabulary::from_file(Path::new(path))?,
        None => SkillsVocabulary::default(),
    };
    info!("Skills vocabulary loaded ({} terms)", vocabulary.len());

    // NER provider: loaded once, immutable and shared after startup.
    let ner = Arc::new(RuleBasedTagger);
    info!("NER tagger initialized (rule-based)");

    let state = AppState {
        ner,
        vocabulary: Arc::new(vocabulary),
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
