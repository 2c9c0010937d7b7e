//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is one batch: a JSON array of event-like values
//! (objects with timestamp/message/level, partial objects, or scalars).
//! Output lines are either:
//! - A SummaryReport for the batch
//! - An ErrorOutput (when the line is not valid JSON)
//!
//! Blank lines produce no output.

use std::io::{self, BufRead, Write};
use summary_engine::types::ErrorOutput;

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "summary-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    // A batch is a JSON array; a single object is accepted as a batch of one.
    let values: Vec<serde_json::Value> = match serde_json::from_str(trimmed) {
      Ok(serde_json::Value::Array(v)) => v,
      Ok(v @ serde_json::Value::Object(_)) => vec![v],
      Ok(_) => {
        let err = ErrorOutput::new("expected a JSON array of events");
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    let report = summary_engine::summarize_values(&values);
    let _ = serde_json::to_writer(&mut out, &report);
    let _ = writeln!(out);
  }

  let _ = out.flush();
}
