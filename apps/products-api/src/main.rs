//! Products API - REST server over an in-memory catalog

use axum_helpers::create_app;
use core_config::load_dotenv;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    load_dotenv();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let app = api::app(&state);

    info!(
        seeded = state.config.seed_products,
        "Starting Products API on port {}", state.config.server.port
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
