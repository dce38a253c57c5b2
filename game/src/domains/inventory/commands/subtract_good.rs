use crate::inventory::Inventory::{GoodQuantityChanged, GoodRemoved};
use crate::inventory::InventoryError::{InsufficientQuantity, InvalidQuantity};
use crate::inventory::{GoodKey, Inventory, InventoryDomain, InventoryError};

impl InventoryDomain {
    /// Takes `count` units of an owned good, the entry is removed at zero.
    ///
    /// Returns the quantity left after the operation.
    pub fn subtract_good(
        &mut self,
        key: &GoodKey,
        count: u32,
    ) -> Result<(u32, impl FnOnce() -> Vec<Inventory> + '_), InventoryError> {
        if count == 0 {
            return Err(InvalidQuantity { key: key.clone() });
        }
        let index = self.index_good(key)?;
        let quantity = self.goods[index].quantity;
        if count > quantity {
            return Err(InsufficientQuantity {
                key: key.clone(),
                quantity,
                requested: count,
            });
        }
        let remaining = quantity - count;
        let operation = move || {
            if remaining == 0 {
                let good = self.goods.remove(index);
                vec![GoodRemoved { key: good.key }]
            } else {
                let good = &mut self.goods[index];
                good.quantity = remaining;
                vec![GoodQuantityChanged {
                    key: good.key.clone(),
                    quantity: remaining,
                }]
            }
        };
        Ok((remaining, operation))
    }
}
