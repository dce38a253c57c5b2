use crate::api::{ActionError, Event};
use crate::inventory::GoodQuery;
use crate::math::Timestamp;
use crate::planting::{CropKey, SoilId};
use crate::{occur, Game};

impl Game {
    pub(crate) fn plant_seed(
        &mut self,
        soil: SoilId,
        now: Timestamp,
    ) -> Result<Vec<Event>, ActionError> {
        let good = self.ensure_selected_good(true)?;
        let kind = good.as_seeds(CropKey)?;
        let kind = self.known.crops.get(kind)?;
        let (_, plant_crop) = self.planting.plant_crop(soil, &kind, now, 0.0)?;
        let (_, subtract_good) = self.inventory.subtract_good(&good.key, 1)?;
        let mut events = occur![plant_crop(), subtract_good()];
        events.extend(self.refresh_browser());
        Ok(events)
    }
}
