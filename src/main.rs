use gatto::{
    bank::fallback_bank,
    config::{get_config, init_config},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // A missing GEMINI_API_KEY stops the process here.
    init_config()?;
    let config = get_config();

    info!(
        "Fallback bank ready with {} questions",
        fallback_bank().total_questions()
    );

    let app_state = AppState::from_config(config)?;
    info!(
        "Using model {} with a {}s timeout",
        config.gemini_model, config.llm_timeout_secs
    );
    info!("Serving static files from: {}", config.static_dir);

    let app = routes::app(app_state, &config.static_dir);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
