use crate::api::{ActionError, Event};
use crate::planting::SoilId;
use crate::{occur, Game};

impl Game {
    pub(crate) fn shovel_crop(&mut self, soil: SoilId) -> Result<Vec<Event>, ActionError> {
        let (_, destroy_crop) = self.planting.destroy_crop(soil)?;
        let events = occur![destroy_crop()];
        Ok(events)
    }
}
