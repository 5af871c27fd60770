use anyhow::Result;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use topdocs_core::corpus::load_corpus;
use topdocs_core::{DocId, Document, SearchConfig, SearchError, SearchServer};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub results: Vec<Document>,
}

#[derive(Serialize)]
pub struct DocResponse {
    pub doc_id: DocId,
    pub rating: i32,
}

/// The index is fully built before the router exists and is only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchServer>,
}

/// Errors surfaced to HTTP clients as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// 400
    BadRequest(String),
    /// 404
    NotFound(String),
    /// 500
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(json!({ "error": msg }))).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::UnknownDocument(_) => ApiError::NotFound(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Load the corpus at `corpus_path`, index it and wrap it in a router.
pub fn load_app(corpus_path: &str, stop_words: &str, config: SearchConfig) -> Result<Router> {
    let docs = load_corpus(corpus_path)?;
    let mut search = SearchServer::with_config(stop_words, config);
    let added = search.ingest(docs)?;
    tracing::info!(num_docs = added, "index built");
    Ok(build_app(search))
}

pub fn build_app(search: SearchServer) -> Router {
    let app_state = AppState { search: Arc::new(search) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params?;
    let start = std::time::Instant::now();
    let mut results = state.search.find_top_documents(&params.q)?;
    // cap >= 1 is guaranteed by SearchConfig
    let cap = state.search.config().max_result_document_count();
    let k = params.k.unwrap_or(cap).clamp(1, cap);
    results.truncate(k);
    let elapsed = start.elapsed();
    Ok(Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), results }))
}

pub async fn doc_handler(
    State(state): State<AppState>,
    doc_id: Result<Path<DocId>, PathRejection>,
) -> Result<Json<DocResponse>, ApiError> {
    let Path(doc_id) = doc_id?;
    let rating = state.search.rating_for(doc_id)?;
    Ok(Json(DocResponse { doc_id, rating }))
}
