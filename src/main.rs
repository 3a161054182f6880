use std::sync::Arc;

use cinephile_api::{
    api::{create_router, AppState},
    config::Config,
    services::providers::{GeminiModel, TmdbCatalog},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cinephile_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // One outbound HTTP client shared by both providers
    let http_client = reqwest::Client::new();

    let catalog = TmdbCatalog::new(
        http_client.clone(),
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.tmdb_image_base_url.clone(),
    );
    let model = GeminiModel::new(
        http_client,
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
    );

    let state = AppState::new(Arc::new(catalog), Arc::new(model));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
