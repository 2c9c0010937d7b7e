//! Core types for the summary engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};

use crate::tally::Tally;

// ---------------------------------------------------------------------------
// Inbound type (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// Canonical log event. Missing fields take defaults; unknown fields are
/// silently ignored. Arbitrary non-record values are coerced by
/// `normalize::event` before they ever reach the aggregation scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
  #[serde(default)]
  pub timestamp: Option<String>,
  #[serde(default)]
  pub message: String,
  #[serde(default = "default_level")]
  pub level: String,
}

pub(crate) fn default_level() -> String {
  "INFO".to_string()
}

// ---------------------------------------------------------------------------
// Aggregation output (internal — consumed by report::build)
// ---------------------------------------------------------------------------

/// Raw tallies from one linear scan over a batch.
///
/// `total == sum of per_minute counts` only when every event carried a
/// usable timestamp; events without one are excluded from bucketing but
/// still counted in `total` and (if applicable) `error_like`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationResult {
  pub total: u64,
  pub error_like: u64,
  /// Counts keyed by minute bucket ("YYYY-MM-DDTHH:MM"), first-seen order.
  pub per_minute: Tally,
  /// Fixed categories (InvalidToken, Expired) plus synthetic "user=<name>"
  /// buckets. User mentions are tallied here AND in `users`.
  pub reasons: Tally,
  pub users: Tally,
  /// Up to 4 sample messages from the head of the batch, input order.
  pub examples: Vec<String>,
}

// ---------------------------------------------------------------------------
// Report types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpikeBucket {
  /// Minute bucket rendered as "<minute>:00Z" — top-of-minute UTC by
  /// convention; true seconds/zone are unknown.
  pub timestamp: String,
  pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCount {
  pub reason: String,
  pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCount {
  pub user: String,
  pub count: u64,
}

/// Structured numeric/categorical digest of one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
  pub total_events: u64,
  pub error_like: u64,
  pub top_spikes: Vec<SpikeBucket>,
  pub top_reasons: Vec<ReasonCount>,
  pub top_users: Vec<UserCount>,
  pub examples: Vec<String>,
}

/// Final per-batch output: digest + rendered narrative + fixed actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
  pub analysis: Analysis,
  #[serde(rename = "summary")]
  pub narrative: String,
  pub actions: Vec<String>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
