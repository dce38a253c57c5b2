use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn sell_good(&mut self, count: u32) -> Result<Vec<Event>, ActionError> {
        let good = self.ensure_selected_good(true)?;
        let (_, subtract_good) = self.inventory.subtract_good(&good.key, count)?;
        let earn_gold = self.economy.earn_gold(good.cost.saturating_mul(count))?;
        let mut events = occur![subtract_good(), earn_gold()];
        events.extend(self.refresh_browser());
        Ok(events)
    }
}
