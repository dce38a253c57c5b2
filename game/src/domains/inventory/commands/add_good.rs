use crate::inventory::Inventory::{GoodAdded, GoodQuantityChanged};
use crate::inventory::InventoryError::InvalidQuantity;
use crate::inventory::{Good, GoodKey, Inventory, InventoryDomain, InventoryError};

impl InventoryDomain {
    /// Merges into the owned entry with the same key or appends a new one.
    pub fn add_good(
        &mut self,
        key: GoodKey,
        title: String,
        count: u32,
        cost: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        if count == 0 {
            return Err(InvalidQuantity { key });
        }
        let existing = self.goods.iter().position(|good| good.key == key);
        let operation = move || match existing {
            Some(index) => {
                let good = &mut self.goods[index];
                good.quantity = good.quantity.saturating_add(count);
                vec![GoodQuantityChanged {
                    key,
                    quantity: good.quantity,
                }]
            }
            None => {
                let events = vec![GoodAdded {
                    key: key.clone(),
                    quantity: count,
                    cost,
                }];
                self.goods.push(Good {
                    key,
                    title,
                    quantity: count,
                    cost,
                });
                events
            }
        };
        Ok(operation)
    }
}
