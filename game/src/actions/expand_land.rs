use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn expand_land(&mut self) -> Result<Vec<Event>, ActionError> {
        let (soil, kind) = self.next_expansion()?;
        let (_, expand_land) = self.economy.expand_land(kind.level, kind.cost)?;
        let create_soil = self.planting.create_soil(soil, 1)?;
        let events = occur![expand_land(), create_soil()];
        Ok(events)
    }
}
