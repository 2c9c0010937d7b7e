//! LogLens Gateway
//!
//! HTTP service exposing the summary engine: query/recipe endpoints with
//! request validation and prompt guardrails, backed by in-process event
//! sources. Thin plumbing; all non-trivial logic lives in summary-engine.

pub mod adapters;
pub mod error;
pub mod guardrails;
pub mod handlers;
pub mod recipes;
pub mod state;
pub mod types;

pub use error::ApiError;
pub use state::AppState;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the gateway router with the given application state.
pub fn create_router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health_status", get(handlers::health))
    .route("/version", get(handlers::version))
    .route("/query", post(handlers::query))
    .route("/recipes", get(handlers::list_recipes))
    .route("/recipes/:name", get(handlers::run_recipe))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
