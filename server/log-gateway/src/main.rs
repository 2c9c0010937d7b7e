//! Binary entrypoint for the gateway.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use log_gateway::adapters::EventSource;
use log_gateway::handlers::{APP_NAME, APP_VERSION};
use log_gateway::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "log_gateway=info,tower_http=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5005".into())
    .parse()?;
  let mock_default = std::env::var("MOCK")
    .map(|v| v.to_lowercase() == "true")
    .unwrap_or(true);

  tracing::info!(mock = mock_default, "startup mode resolved from env");

  let state = Arc::new(AppState::new(EventSource::new(mock_default)));
  let app = log_gateway::create_router(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  tracing::info!(
    "{} v{} listening on http://{} | mode={}",
    APP_NAME,
    APP_VERSION,
    addr,
    if mock_default { "mock" } else { "realish" }
  );

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
