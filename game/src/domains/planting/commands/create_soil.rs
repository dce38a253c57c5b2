use crate::planting::Planting::SoilCreated;
use crate::planting::PlantingError::DuplicateSoil;
use crate::planting::{Planting, PlantingDomain, PlantingError, Soil, SoilId};

impl PlantingDomain {
    pub fn create_soil(
        &mut self,
        id: SoilId,
        level: u8,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        if self.soils.iter().any(|soil| soil.id == id) {
            return Err(DuplicateSoil { soil: id });
        }
        let level = level.max(1);
        let operation = move || {
            self.soils.push(Soil {
                id,
                level,
                crop: None,
            });
            vec![SoilCreated { soil: id, level }]
        };
        Ok(operation)
    }
}
