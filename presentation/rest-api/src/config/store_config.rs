use persistence::store::StoreConfig;
use std::env;

const DEFAULT_DB_PATH: &str = "data/db.json";

/// Initialize the inventory store location from environment variables
///
/// Environment variables:
/// - INVENTORY_DB_PATH: Path of the JSON inventory file (default: "data/db.json").
///   The file and its directory are created on first boot.
pub fn init_store_config() -> StoreConfig {
    let path = env::var("INVENTORY_DB_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
    StoreConfig::new(path)
}
