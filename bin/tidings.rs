use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tidings::api::{create_router, AppState};
use tidings::{corpus, SearchEngine, ServerConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "tidings")]
#[command(about = "Minimal full-text news search service", long_about = None)]
struct Args {
    /// Bind address for the HTTP API
    #[arg(long, env = "TIDINGS_BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind_addr: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig::new(args.bind_addr);

    info!("Starting Tidings v{}", tidings::VERSION);

    info!("Adding documents");
    let store = corpus::sample_corpus();
    let document_count = store.len();

    info!("Building indexes");
    let engine = Arc::new(SearchEngine::new(&config.analyzer));
    engine.rebuild_all(store);

    let snapshot = engine.snapshot();
    info!(
        "Indexed {} documents, {} title terms, {} body terms, {} vocabulary terms",
        document_count,
        snapshot.title_index.len(),
        snapshot.body_index.len(),
        snapshot.vocabulary.len()
    );

    let app = create_router(AppState {
        engine: engine.clone(),
    });

    info!("HTTP API listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
