use std::sync::Arc;
use translate_relay_engine::{
    adapter::TranslateAdapter,
    config::Config,
    server::{build_app, AppState},
    Result,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting translate relay engine...");

    let config = Config::from_file("config.yaml").unwrap_or_else(|_| {
        info!("Failed to load config.yaml, using default config");
        Config::default()
    });

    let adapter = Arc::new(TranslateAdapter::new(config.upstream.clone())?);

    let state = AppState {
        adapter,
        pacing: config.pacing.clone(),
    };

    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
