use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::engine::SearchEngine;

use super::handlers::*;

/// Application state shared across all handlers
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/search", get(search))
        .route("/documents/:id", get(get_document))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
