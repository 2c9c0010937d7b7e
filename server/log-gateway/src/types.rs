//! Request/response types for the gateway.

use serde::{Deserialize, Serialize};
use summary_engine::LogEvent;

pub const DEFAULT_LOG_GROUP: &str = "/aws/lambda/auth-service";
pub const DEFAULT_TIME_RANGE: &str = "2h";

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
  /// Recipe name or free-form instruction text.
  pub prompt: String,
  #[serde(default)]
  pub log_group: Option<String>,
  #[serde(default)]
  pub time_range: Option<String>,
  /// Overrides the source's configured default when present.
  #[serde(default)]
  pub mock: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RecipeParams {
  #[serde(default)]
  pub log_group: Option<String>,
  #[serde(default)]
  pub time_range: Option<String>,
  #[serde(default)]
  pub mock: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct RequestEcho {
  pub prompt: String,
  pub log_group: String,
  pub time_range: String,
  pub mock: bool,
  pub resolved_recipe: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
  pub request_echo: RequestEcho,
  pub raw_events: Vec<LogEvent>,
  pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct RecipeList {
  pub available_recipes: Vec<String>,
}
