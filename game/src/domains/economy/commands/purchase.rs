use crate::economy::Economy::GoldChanged;
use crate::economy::EconomyError::{InsufficientFunds, InsufficientLevel};
use crate::economy::{Economy, EconomyDomain, EconomyError};

impl EconomyDomain {
    /// Buys `count` units, never more than the gold covers.
    pub fn purchase(
        &mut self,
        price: u32,
        count: u32,
        required_level: u32,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if self.level < required_level {
            return Err(InsufficientLevel {
                required: required_level,
                level: self.level,
            });
        }
        let affordable = self.affordable(price);
        if affordable == 0 || count > affordable {
            return Err(InsufficientFunds {
                cost: price.saturating_mul(count),
                gold: self.gold,
                affordable,
            });
        }
        let total = price * count;
        let operation = move || {
            self.gold -= total;
            vec![GoldChanged { gold: self.gold }]
        };
        Ok(operation)
    }
}
