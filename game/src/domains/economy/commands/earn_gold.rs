use crate::economy::Economy::GoldChanged;
use crate::economy::{Economy, EconomyDomain, EconomyError};

impl EconomyDomain {
    pub fn earn_gold(
        &mut self,
        amount: u32,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        let operation = move || {
            self.gold = self.gold.saturating_add(amount);
            vec![GoldChanged { gold: self.gold }]
        };
        Ok(operation)
    }
}
