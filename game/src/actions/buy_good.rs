use crate::api::{ActionError, Event};
use crate::inventory::GoodQuery;
use crate::planting::CropKey;
use crate::{occur, Game};

impl Game {
    pub(crate) fn buy_good(&mut self, count: u32) -> Result<Vec<Event>, ActionError> {
        let good = self.ensure_selected_good(false)?;
        let required_level = match good.as_produce(CropKey) {
            Some(crop) => self.known.crops.get(crop)?.level,
            None => 0,
        };
        let purchase = self.economy.purchase(good.cost, count, required_level)?;
        let add_good = self
            .inventory
            .add_good(good.key, good.title, count, good.cost)?;
        let events = occur![purchase(), add_good()];
        Ok(events)
    }
}
