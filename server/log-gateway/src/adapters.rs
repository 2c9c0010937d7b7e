//! In-process event sources. The engine only sees `Vec<LogEvent>`; whether
//! the window came from the deterministic mock fixture or the realish one
//! is invisible downstream.

use chrono::{DateTime, Duration, Timelike, Utc};
use summary_engine::LogEvent;

/// Configurable event source. The mock toggle is constructor state, not a
/// process-wide global; per-request overrides win over the default.
#[derive(Debug, Clone)]
pub struct EventSource {
  mock_default: bool,
}

impl EventSource {
  pub fn new(mock_default: bool) -> Self {
    Self { mock_default }
  }

  pub fn mock_default(&self) -> bool {
    self.mock_default
  }

  /// Resolve the effective mode for one request.
  pub fn effective_mock(&self, override_flag: Option<bool>) -> bool {
    override_flag.unwrap_or(self.mock_default)
  }

  /// Fetch an event window. log_group/time_range select the window in a
  /// real deployment; the fixtures ignore them.
  pub fn fetch(&self, _log_group: &str, _time_range: &str, mock: bool) -> Vec<LogEvent> {
    let now = minute_truncated(Utc::now());
    if mock {
      mock_logs(now)
    } else {
      realish_logs(now)
    }
  }
}

/// RFC3339 at minute precision, UTC.
fn iso(dt: DateTime<Utc>) -> String {
  dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

fn minute_truncated(dt: DateTime<Utc>) -> DateTime<Utc> {
  dt.with_second(0)
    .and_then(|d| d.with_nanosecond(0))
    .unwrap_or(dt)
}

fn event(ts: DateTime<Utc>, level: &str, message: &str) -> LogEvent {
  LogEvent {
    timestamp: Some(iso(ts)),
    message: message.to_string(),
    level: level.to_string(),
  }
}

/// Deterministic dataset: clear InvalidToken spike, users alice/bob/carol.
fn mock_logs(now: DateTime<Utc>) -> Vec<LogEvent> {
  vec![
    event(
      now - Duration::minutes(50),
      "INFO",
      "Auth failed for user=alice reason=InvalidToken",
    ),
    event(
      now - Duration::minutes(50),
      "INFO",
      "Auth failed for user=bob reason=InvalidToken",
    ),
    event(
      now - Duration::minutes(20),
      "INFO",
      "Token refresh succeeded for user=carol",
    ),
    event(
      now - Duration::minutes(10),
      "ERROR",
      "Auth failed for user=carol reason=InvalidToken",
    ),
    event(
      now - Duration::minutes(10),
      "ERROR",
      "Auth failed for user=carol reason=InvalidToken",
    ),
  ]
}

/// Different shape: gateway timeouts, DB errors, Expired, users dave/erin.
fn realish_logs(now: DateTime<Utc>) -> Vec<LogEvent> {
  vec![
    event(
      now - Duration::minutes(41),
      "ERROR",
      "Gateway timeout while calling /api/orders user=dave",
    ),
    event(
      now - Duration::minutes(39),
      "ERROR",
      "DatabaseError: connection pool exhausted on writer",
    ),
    event(
      now - Duration::minutes(38),
      "INFO",
      "Retry succeeded for job=order_sync batch=42",
    ),
    event(
      now - Duration::minutes(17),
      "ERROR",
      "Auth failed for user=erin reason=Expired",
    ),
    event(
      now - Duration::minutes(16),
      "ERROR",
      "Payment service timeout user=erin route=/pay/charge",
    ),
  ]
}
