use game::config::Configuration;
use log::warn;
use std::str::FromStr;

/// Defaults overridden by `FARM_*` environment variables.
pub fn configure() -> Configuration {
    let mut config = Configuration::default();
    if let Ok(database) = std::env::var("FARM_DATABASE") {
        config.database = database;
    }
    if let Some(page_size) = read("FARM_PAGE_SIZE") {
        config.page_size = page_size;
    }
    if let Some(shop_stock) = read("FARM_SHOP_STOCK") {
        config.shop_stock = shop_stock;
    }
    if let Some(seed) = read("FARM_SEED") {
        config.seed = Some(seed);
    }
    config
}

fn read<T: FromStr>(name: &str) -> Option<T> {
    let value = std::env::var(name).ok()?;
    match value.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignore {}={:?}: not a number", name, value);
            None
        }
    }
}
