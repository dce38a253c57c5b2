use crate::economy::Economy::{ExpansionAdvanced, GoldChanged};
use crate::economy::EconomyError::{InsufficientFunds, InsufficientLevel, LandExhausted};
use crate::economy::{Economy, EconomyDomain, EconomyError};
use crate::planting::SoilId;

impl EconomyDomain {
    /// Pays for the next soil and moves the counter down to the following one.
    ///
    /// Level and funds are checked independently, a shortage of funds is the
    /// reported reason when both fail.
    pub fn expand_land(
        &mut self,
        required_level: u32,
        cost: u32,
    ) -> Result<(SoilId, impl FnOnce() -> Vec<Economy> + '_), EconomyError> {
        let soil = self.next_soil.ok_or(LandExhausted)?;
        let enough_level = self.level >= required_level;
        let enough_gold = self.gold >= cost;
        if !enough_gold {
            return Err(InsufficientFunds {
                cost,
                gold: self.gold,
                affordable: 0,
            });
        }
        if !enough_level {
            return Err(InsufficientLevel {
                required: required_level,
                level: self.level,
            });
        }
        let next = soil.0.checked_sub(1).map(SoilId);
        let operation = move || {
            self.gold -= cost;
            self.next_soil = next;
            vec![GoldChanged { gold: self.gold }, ExpansionAdvanced { soil, next }]
        };
        Ok((soil, operation))
    }
}
