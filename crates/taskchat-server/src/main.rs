//! TaskChat — task extraction over a hosted chat-completion API.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // API keys come from the environment or a local .env file.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = taskchat_core::ServerConfig::from_env();
    let port = config.port;

    let state = Arc::new(AppState::new(config));

    if state.llm_config.resolve_provider().is_none() {
        info!("No LLM API key configured; /chat will return errors until one is set");
    }

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("TaskChat server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
