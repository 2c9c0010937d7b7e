//! LogLens Summary Engine — deterministic, rule-based log-window digest.
//!
//! Ingests a bounded batch of event-like records, normalizes them, scans
//! the batch once for per-minute counts / reason tallies / user tallies /
//! error-likeness, and renders a fixed-template SummaryReport.
//!
//! No AI, no DB, no network, no clock; pure computation.

pub mod aggregate;
pub mod normalize;
pub mod report;
pub mod tally;
pub mod types;

pub use aggregate::aggregate;
pub use types::{AggregationResult, LogEvent, SummaryReport};

/// Normalize + aggregate + rank/render. The sole entry point callers
/// should use for typed events.
pub fn summarize(events: &[LogEvent]) -> SummaryReport {
  report::build(&aggregate::aggregate(events))
}

/// Summarize arbitrary JSON values (structured, partial, or scalar);
/// normalization in front guarantees the scan never sees malformed input.
pub fn summarize_values(values: &[serde_json::Value]) -> SummaryReport {
  let events: Vec<LogEvent> = values.iter().map(normalize::event).collect();
  summarize(&events)
}

/// Compatibility wrapper for instruction-driven callers. The prompt and
/// log-group context are accepted but have no effect on the output; the
/// digest is entirely data-driven.
pub fn summarize_for_prompt(_prompt: &str, events: &[LogEvent], _log_group: &str) -> String {
  summarize(events).narrative
}
