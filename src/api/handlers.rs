use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::types::*;
use crate::error::TidingsError;
use crate::models::DocumentId;

use super::router::AppState;

/// Error wrapper for API handlers
pub enum ApiError {
    Tidings(TidingsError),
}

impl From<TidingsError> for ApiError {
    fn from(e: TidingsError) -> Self {
        ApiError::Tidings(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Tidings(e) = self;
        let (status, error_type) = match &e {
            TidingsError::EmptyQuery => (StatusCode::BAD_REQUEST, "empty_query"),
            TidingsError::DocumentNotFound(_) => (StatusCode::NOT_FOUND, "document_not_found"),
            TidingsError::InvalidPattern(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "invalid_pattern")
            }
            TidingsError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let error_response = ErrorResponse::new(error_type, e.to_string());
        (status, Json(error_response)).into_response()
    }
}

/// Search documents by free-text query
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let results = state.engine.search(&params.query)?;

    Ok(Json(SearchResponse {
        query: params.query,
        count: results.len(),
        results,
    }))
}

/// Get a document by id
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DocumentId>,
) -> Result<impl IntoResponse, ApiError> {
    let doc = state.engine.document(id)?;
    Ok(Json(doc))
}

/// Health check
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}
