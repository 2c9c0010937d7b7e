//! Shared application state.

use crate::adapters::EventSource;

pub struct AppState {
  pub source: EventSource,
}

impl AppState {
  pub fn new(source: EventSource) -> Self {
    Self { source }
  }
}
