//! Configuration for Products API

use axum_helpers::ApiKeyConfig;
use core_config::{AppInfo, FromEnv, app_info, env_bool, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub api_key: ApiKeyConfig,
    pub environment: Environment,
    /// Start with the sample catalog (`SEED_PRODUCTS`, default true)
    pub seed_products: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000 unless set
        let api_key = ApiKeyConfig::from_env()?; // Required - will fail if not set
        let seed_products = env_bool("SEED_PRODUCTS", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            api_key,
            environment,
            seed_products,
        })
    }
}
