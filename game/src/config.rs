/// Session settings, every field has a default matching the shipped game data.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub database: String,
    pub page_size: usize,
    /// Quantity shown for every shop entry.
    pub shop_stock: u32,
    /// Fixed harvest randomness, entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            database: "farm.sqlite".to_string(),
            page_size: crate::inventory::PAGE_SIZE,
            shop_stock: 10,
            seed: None,
        }
    }
}
