use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use userhub_lib::{config::Settings, router, store::MemoryStore, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    // Try to load with explicit path if default doesn't work
    let settings = Settings::load()
        .or_else(|_| Settings::load_from("config/default.toml"))
        .or_else(|_| Settings::load_from("./config/default.toml"))?;

    // Initialize tracing, RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .init();

    let bind_addr = settings.bind_addr;
    let environment = settings.environment;

    // Create storage and application state
    let store = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState::new(store, settings));

    let app = router::create_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!(addr = %bind_addr, environment = ?environment, "userhub listening");

    axum::serve(listener, app).await?;

    Ok(())
}
