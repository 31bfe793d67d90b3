use super::{cors_config, server_config::ServerConfig, store_config};
use persistence::store::StoreConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            store: store_config::init_store_config(),
        }
    }
}
