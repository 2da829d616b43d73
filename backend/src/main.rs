mod application;
mod domain;
mod infrastructure;
mod settings;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::AppState;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::load().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log.filter)),
        )
        .init();

    let state = AppState::in_memory(settings.films.popular_default_count);
    let app = infrastructure::driving::http::router(state);

    let address = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Filmorate listening on {}", address);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
