//! HTTP handlers for the gateway.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::guardrails;
use crate::recipes;
use crate::state::AppState;
use crate::types::{
  QueryRequest, QueryResponse, RecipeList, RecipeParams, RequestEcho, DEFAULT_LOG_GROUP,
  DEFAULT_TIME_RANGE,
};

pub const APP_NAME: &str = "LogLens Gateway";
pub const APP_VERSION: &str = "1.1.0";

const MAX_PROMPT_CHARS: usize = 300;
/// Upper bound on the window handed to the engine; its cost is linear in
/// event count and has no internal backpressure.
const MAX_EVENTS: usize = 200;

static TIME_RANGE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\d+[smhd]$").expect("time-range pattern must compile"));

pub async fn health() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}

pub async fn version(State(state): State<Arc<AppState>>) -> Json<Value> {
  Json(json!({
    "app": APP_NAME,
    "version": APP_VERSION,
    "mode": if state.source.mock_default() { "mock" } else { "realish" },
  }))
}

pub async fn list_recipes() -> Json<RecipeList> {
  Json(RecipeList {
    available_recipes: recipes::names(),
  })
}

pub async fn query(
  State(state): State<Arc<AppState>>,
  Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
  if req.prompt.chars().count() > MAX_PROMPT_CHARS {
    return Err(ApiError::PromptTooLong(MAX_PROMPT_CHARS));
  }
  if let Some(tr) = req.time_range.as_deref() {
    validate_time_range(tr)?;
  }

  let recipe = recipes::normalize_name(&req.prompt);
  let prompt_text = recipes::resolve(&recipe).unwrap_or(req.prompt.as_str());

  tracing::debug!(prompt = %prompt_text, "validating prompt");
  guardrails::validate_prompt(prompt_text)?;

  let log_group = req.log_group.clone().unwrap_or_else(|| DEFAULT_LOG_GROUP.to_string());
  let time_range = req.time_range.clone().unwrap_or_else(|| DEFAULT_TIME_RANGE.to_string());
  let mock = state.source.effective_mock(req.mock);

  Ok(Json(run_summary(
    &state,
    req.prompt.clone(),
    prompt_text,
    recipe,
    log_group,
    time_range,
    mock,
  )))
}

pub async fn run_recipe(
  State(state): State<Arc<AppState>>,
  Path(name): Path<String>,
  Query(params): Query<RecipeParams>,
) -> Result<Json<QueryResponse>, ApiError> {
  if let Some(tr) = params.time_range.as_deref() {
    validate_time_range(tr)?;
  }

  let log_group = params.log_group.unwrap_or_else(|| DEFAULT_LOG_GROUP.to_string());
  let time_range = params.time_range.unwrap_or_else(|| DEFAULT_TIME_RANGE.to_string());
  let mock = state.source.effective_mock(params.mock);

  let recipe = recipes::normalize_name(&name);
  let fallback = format!("Summarize logs for {} over {}.", log_group, time_range);
  let prompt_text = recipes::resolve(&recipe).map(String::from).unwrap_or(fallback);

  guardrails::validate_prompt(&prompt_text)?;

  Ok(Json(run_summary(
    &state,
    recipe.clone(),
    &prompt_text,
    recipe,
    log_group,
    time_range,
    mock,
  )))
}

fn run_summary(
  state: &AppState,
  echo_prompt: String,
  prompt_text: &str,
  resolved_recipe: String,
  log_group: String,
  time_range: String,
  mock: bool,
) -> QueryResponse {
  let mut events = state.source.fetch(&log_group, &time_range, mock);
  events.truncate(MAX_EVENTS);

  let summary = summary_engine::summarize_for_prompt(prompt_text, &events, &log_group);
  tracing::info!(
    events = events.len(),
    %log_group,
    mock,
    "summarized log window"
  );

  QueryResponse {
    request_echo: RequestEcho {
      prompt: echo_prompt,
      log_group,
      time_range,
      mock,
      resolved_recipe,
    },
    raw_events: events,
    summary,
  }
}

fn validate_time_range(tr: &str) -> Result<(), ApiError> {
  if TIME_RANGE_RE.is_match(tr) {
    Ok(())
  } else {
    Err(ApiError::InvalidTimeRange)
  }
}
