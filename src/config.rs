//! Server settings loaded from YAML files and `APP_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Only origin allowed to call the API. Any origin when unset.
    pub cors_allowed_origin: Option<String>,
    /// Directory with the built client, served at `/` when set.
    pub static_dir: Option<String>,
}

impl ServerConfig {
    /// Loads built-in defaults, then `config/default.yaml`, then
    /// `config/{APP_ENV}.yaml`, then `APP_*` variables. Later sources win.
    pub fn load() -> Result<Self, ConfigError> {
        // `.env` is optional.
        let _ = dotenvy::dotenv();

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        Config::builder()
            .set_default("database_url", "inventory.db")?
            .set_default("address", "127.0.0.1")?
            .set_default("port", 5000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// `address:port` pair for binding the listener.
    pub fn bind_address(&self) -> (String, u16) {
        (self.address.clone(), self.port)
    }
}
