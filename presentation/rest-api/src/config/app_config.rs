use super::{
    cors_config, display_config::DisplayConfig, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let storage = StorageConfig::from_env();
        let display = DisplayConfig::from_env(storage.public_path.clone());
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            storage,
            display,
        }
    }
}
