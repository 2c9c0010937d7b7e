//! Single-pass aggregation: per-minute counts, reason/user tallies, error-likeness.

use crate::tally::Tally;
use crate::types::{AggregationResult, LogEvent};

/// Sample messages kept from the head of the batch.
const MAX_EXAMPLES: usize = 4;

/// Minute-bucket key length: "YYYY-MM-DDTHH:MM".
const MINUTE_KEY_CHARS: usize = 16;

/// Scan the batch once and tally everything. Pure, total, order-preserving;
/// malformed per-event features are absorbed without touching other tallies.
pub fn aggregate(events: &[LogEvent]) -> AggregationResult {
  let mut per_minute = Tally::new();
  let mut reasons = Tally::new();
  let mut users = Tally::new();
  let mut examples: Vec<String> = Vec::new();
  let mut error_like: u64 = 0;

  for (i, event) in events.iter().enumerate() {
    let msg = event.message.trim();
    if i < MAX_EXAMPLES && !msg.is_empty() {
      examples.push(msg.to_string());
    }

    let low = msg.to_lowercase();

    // Independent substring categories: a message may hit both.
    if low.contains("invalidtoken") {
      reasons.increment("InvalidToken");
    }
    if low.contains("expired") {
      reasons.increment("Expired");
    }

    if low.contains("user=") {
      if let Some(user) = extract_user(msg) {
        users.increment(&user);
        // Intentional double count: each mention also lands in a
        // synthetic reason bucket. Observable in current outputs.
        reasons.increment(&format!("user={}", user));
      }
    }

    if event.level.eq_ignore_ascii_case("ERROR")
      || low.contains("failed")
      || low.contains("error")
    {
      error_like += 1;
    }

    if let Some(key) = minute_key(event.timestamp.as_deref()) {
      per_minute.increment(&key);
    }
  }

  AggregationResult {
    total: events.len() as u64,
    error_like,
    per_minute,
    reasons,
    users,
    examples,
  }
}

/// Token after "user=" up to the next whitespace, trailing `,;.` stripped.
/// Returns None when the marker is absent in the original casing or the
/// token comes up empty — treated as "no user found" for this event.
fn extract_user(msg: &str) -> Option<String> {
  let start = msg.find("user=")? + "user=".len();
  let rest = &msg[start..];
  let token = rest.split_whitespace().next().unwrap_or("");
  let user = token.trim_end_matches([',', ';', '.']);
  if user.is_empty() {
    None
  } else {
    Some(user.to_string())
  }
}

/// Minute bucket: first 16 chars of the timestamp string ("YYYY-MM-DDTHH:MM").
/// Absent or empty timestamps produce no bucket; the event still counts
/// toward the batch total.
pub fn minute_key(ts: Option<&str>) -> Option<String> {
  let ts = ts?;
  if ts.is_empty() {
    return None;
  }
  Some(ts.chars().take(MINUTE_KEY_CHARS).collect())
}

/// One-decimal percentage; "0%" when the denominator is zero.
pub fn percent(n: u64, d: u64) -> String {
  if d == 0 {
    "0%".to_string()
  } else {
    format!("{:.1}%", 100.0 * n as f64 / d as f64)
  }
}
