use axum::routing::get;
use axum::Router;
use tracing_subscriber::EnvFilter;

use lexicon_search::api;
use lexicon_search::config::Config;
use lexicon_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Lexicon file: {}", config.lexicon_path.display());

    let state = AppState::new(config.clone())?;

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/lexicon/search", get(api::search::search_lexicon))
        .route("/api/lexicon/languages", get(api::entries::list_languages))
        .route("/api/lexicon/{id}", get(api::entries::get_entry))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}
