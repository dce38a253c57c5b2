use crate::api::{ActionError, Event};
use crate::inventory::{GoodKey, GoodKind};
use crate::math::Timestamp;
use crate::planting::SoilId;
use crate::{occur, Game};

impl Game {
    pub(crate) fn harvest_crop(
        &mut self,
        soil: SoilId,
        now: Timestamp,
    ) -> Result<Vec<Event>, ActionError> {
        let (harvest, harvest_crop) = self.planting.harvest_crop(soil, now, &mut self.random)?;
        let kind = harvest.kind;
        let add_fruits = if harvest.fruits > 0 {
            let key = GoodKey::new(GoodKind::Fruit, kind.id.0.to_string());
            let add_good = self.inventory.add_good(
                key,
                kind.name.clone(),
                harvest.fruits as u32,
                kind.fruit_cost,
            )?;
            Some(add_good)
        } else {
            None
        };
        let known = &self.known;
        let gain_experience = self
            .economy
            .gain_experience(kind.exp, |level| known.required_experience(level))?;
        let mut events = occur![harvest_crop()];
        if let Some(add_fruits) = add_fruits {
            events.push(add_fruits().into());
        }
        events.push(gain_experience().into());
        Ok(events)
    }
}
