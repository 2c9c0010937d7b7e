//! Canned instruction texts for common analysis questions.

const RECIPES: [(&str, &str); 3] = [
  (
    "error_spikes",
    "Summarize authentication or system error spikes in the given log group \
     for the requested time window. Highlight main causes, frequency spikes, \
     affected users if visible, and suggest next steps.",
  ),
  (
    "slow_queries",
    "Summarize slow database or API query performance issues. Include typical \
     durations, any frequency patterns, and likely bottlenecks.",
  ),
  (
    "traffic_summary",
    "Summarize overall service traffic trends. Highlight peaks, dips, and any \
     anomalies worth investigating.",
  ),
];

/// Lower-cased, trimmed lookup key for a recipe name.
pub fn normalize_name(name: &str) -> String {
  name.trim().to_lowercase()
}

/// Instruction text for a known recipe; None for unknown names (callers
/// fall back to the raw prompt).
pub fn resolve(name: &str) -> Option<&'static str> {
  let key = normalize_name(name);
  RECIPES
    .iter()
    .find(|(n, _)| *n == key)
    .map(|(_, text)| *text)
}

/// Recipe names, sorted.
pub fn names() -> Vec<String> {
  let mut names: Vec<String> = RECIPES.iter().map(|(n, _)| n.to_string()).collect();
  names.sort();
  names
}
