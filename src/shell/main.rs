use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_attendance::modules::attendees::adapters::outbound::registry_in_memory::InMemoryAttendeeRegistry;
use event_attendance::shell::config::{AppConfig, DEFAULT_LOG_FILTER};
use event_attendance::shell::http::router;
use event_attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env()?;

    // In-memory registry; records live as long as the process
    let registry = Arc::new(InMemoryAttendeeRegistry::with_seeded_events());
    let state = AppState::new(registry);
    let app = router(state, &config.web_dir);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    tracing::info!(
        web_dir = %config.web_dir.display(),
        "listening on http://{}:{}",
        config.host,
        config.port
    );
    axum::serve(listener, app).await?;
    Ok(())
}
