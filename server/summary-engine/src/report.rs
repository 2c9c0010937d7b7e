//! Ranking & formatting: reduce raw tallies to top-k views and render the
//! narrative. Pure, stateless; same aggregation always yields the same text.

use crate::aggregate::percent;
use crate::types::{Analysis, AggregationResult, ReasonCount, SpikeBucket, SummaryReport, UserCount};

const TOP_SPIKES: usize = 2;
const TOP_REASONS: usize = 3;
const TOP_USERS: usize = 3;

/// Shown when neither spikes nor dominant reasons were found. The users
/// list is deliberately not consulted for this check.
const FALLBACK_LINE: &str = "• No obvious spikes or dominant reasons detected.";

const CLOSING_LINE: &str =
  "• Next steps: add alert InvalidToken>10/min(5m); review token TTL/refresh; add auth-failure panel.";

/// Recommended operational follow-ups; static, not derived from the data.
const ACTIONS: [&str; 3] = [
  "Alert if InvalidToken > 10/min for 5m",
  "Review token TTL and client refresh flow",
  "Add dashboard: auth failure rate per minute",
];

/// Reduce an aggregation to bounded top-k views plus the rendered narrative.
pub fn build(agg: &AggregationResult) -> SummaryReport {
  let top_spikes: Vec<SpikeBucket> = agg
    .per_minute
    .top_k(TOP_SPIKES)
    .into_iter()
    .map(|(minute, count)| SpikeBucket {
      timestamp: format!("{}:00Z", minute),
      count,
    })
    .collect();

  let top_reasons: Vec<ReasonCount> = agg
    .reasons
    .top_k(TOP_REASONS)
    .into_iter()
    .map(|(reason, count)| ReasonCount { reason, count })
    .collect();

  let top_users: Vec<UserCount> = agg
    .users
    .top_k(TOP_USERS)
    .into_iter()
    .map(|(user, count)| UserCount { user, count })
    .collect();

  let narrative = render_narrative(agg, &top_spikes, &top_reasons, &top_users);

  SummaryReport {
    analysis: Analysis {
      total_events: agg.total,
      error_like: agg.error_like,
      top_spikes,
      top_reasons,
      top_users,
      examples: agg.examples.clone(),
    },
    narrative,
    actions: ACTIONS.iter().map(|s| s.to_string()).collect(),
  }
}

fn render_narrative(
  agg: &AggregationResult,
  spikes: &[SpikeBucket],
  reasons: &[ReasonCount],
  users: &[UserCount],
) -> String {
  let mut lines: Vec<String> = Vec::new();

  lines.push(format!(
    "• Window size: {} events; error-like: {} ({}).",
    agg.total,
    agg.error_like,
    percent(agg.error_like, agg.total)
  ));

  if !spikes.is_empty() {
    let bits: Vec<String> = spikes
      .iter()
      .map(|s| format!("{} ×{}", s.timestamp, s.count))
      .collect();
    lines.push(format!("• Spikes: {}.", bits.join(", ")));
  }

  if !reasons.is_empty() {
    let bits: Vec<String> = reasons
      .iter()
      .map(|r| format!("{} ×{} ({})", r.reason, r.count, percent(r.count, agg.total)))
      .collect();
    lines.push(format!("• Top reasons: {}.", bits.join(", ")));
  }

  if !users.is_empty() {
    let bits: Vec<String> = users
      .iter()
      .map(|u| format!("{} ×{}", u.user, u.count))
      .collect();
    lines.push(format!("• Affected users: {}.", bits.join(", ")));
  }

  if spikes.is_empty() && reasons.is_empty() {
    lines.push(FALLBACK_LINE.to_string());
  }

  lines.push(CLOSING_LINE.to_string());
  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::aggregate::aggregate;
  use crate::types::LogEvent;

  fn ev(ts: Option<&str>, msg: &str, level: &str) -> LogEvent {
    LogEvent {
      timestamp: ts.map(String::from),
      message: msg.to_string(),
      level: level.to_string(),
    }
  }

  #[test]
  fn empty_batch_renders_fallback_and_actions() {
    let report = build(&aggregate(&[]));
    assert_eq!(report.analysis.total_events, 0);
    assert!(report.narrative.contains(FALLBACK_LINE));
    assert!(report.narrative.contains("• Next steps:"));
    assert!(report.narrative.contains("(0%)"), "zero denominator renders 0%");
    assert_eq!(report.actions.len(), 3);
  }

  #[test]
  fn spikes_rank_by_count_then_first_seen() {
    let events: Vec<LogEvent> = [
      "2025-01-15T10:01:00Z",
      "2025-01-15T10:01:30Z",
      "2025-01-15T10:02:00Z",
      "2025-01-15T10:03:00Z",
      "2025-01-15T10:03:30Z",
    ]
    .iter()
    .map(|ts| ev(Some(ts), "m", "INFO"))
    .collect();

    let report = build(&aggregate(&events));
    let spikes = &report.analysis.top_spikes;
    assert_eq!(spikes.len(), 2);
    // 10:01 and 10:03 both count 2; 10:01 was seen first.
    assert_eq!(spikes[0].timestamp, "2025-01-15T10:01:00Z");
    assert_eq!(spikes[0].count, 2);
    assert_eq!(spikes[1].timestamp, "2025-01-15T10:03:00Z");
    assert_eq!(spikes[1].count, 2);
  }

  #[test]
  fn narrative_lines_appear_in_fixed_order() {
    let events = vec![
      ev(Some("2025-01-15T10:01:00Z"), "Auth failed for user=alice reason=InvalidToken", "ERROR"),
      ev(Some("2025-01-15T10:01:10Z"), "Auth failed for user=bob reason=InvalidToken", "ERROR"),
    ];
    let report = build(&aggregate(&events));
    let lines: Vec<&str> = report.narrative.lines().collect();
    assert!(lines[0].starts_with("• Window size: 2 events; error-like: 2 (100.0%)."));
    assert!(lines[1].starts_with("• Spikes: 2025-01-15T10:01:00Z ×2."));
    assert!(lines[2].starts_with("• Top reasons: InvalidToken ×2 (100.0%)"));
    assert!(lines[3].starts_with("• Affected users: alice ×1, bob ×1."));
    assert!(lines[4].starts_with("• Next steps:"));
    assert!(!report.narrative.contains(FALLBACK_LINE));
  }

  #[test]
  fn users_alone_still_trigger_fallback() {
    // A user mention also creates a "user=<name>" reason bucket, so the
    // only way to get users without reasons is not reachable through
    // aggregate(); exercise the renderer directly to pin the condition.
    let mut agg = aggregate(&[]);
    agg.total = 1;
    agg.users.increment("alice");
    let users = vec![UserCount { user: "alice".into(), count: 1 }];
    let text = render_narrative(&agg, &[], &[], &users);
    assert!(text.contains("• Affected users: alice ×1."));
    assert!(text.contains(FALLBACK_LINE), "fallback ignores the users list");
  }

  #[test]
  fn top_k_lists_are_bounded() {
    let events: Vec<LogEvent> = (0..10)
      .map(|i| {
        ev(
          Some(&format!("2025-01-15T10:{:02}:00Z", i)),
          &format!("Auth failed for user=u{} reason=InvalidToken expired", i),
          "ERROR",
        )
      })
      .collect();
    let report = build(&aggregate(&events));
    assert_eq!(report.analysis.top_spikes.len(), 2);
    assert_eq!(report.analysis.top_reasons.len(), 3);
    assert_eq!(report.analysis.top_users.len(), 3);
    assert_eq!(report.analysis.examples.len(), 4);
  }
}
