//! API error types and HTTP conversions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Prompt too long. Keep under {0} characters.")]
  PromptTooLong(usize),

  #[error("Invalid time_range. Use like 15m, 2h, 7d.")]
  InvalidTimeRange,

  #[error("Guardrails: {0}")]
  Guardrail(String),
}

/// Wire shape for rejected requests: `{"detail": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
  detail: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let detail = self.to_string();
    tracing::info!(%detail, "request rejected");
    (StatusCode::BAD_REQUEST, Json(ErrorBody { detail })).into_response()
  }
}
