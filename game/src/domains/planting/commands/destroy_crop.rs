use crate::planting::Planting::CropDestroyed;
use crate::planting::{CropId, Planting, PlantingDomain, PlantingError, SoilId};

impl PlantingDomain {
    pub fn destroy_crop(
        &mut self,
        soil: SoilId,
    ) -> Result<(CropId, impl FnOnce() -> Vec<Planting> + '_), PlantingError> {
        let (soil_index, crop_index) = self.index_occupied(soil)?;
        let id = self.crops[crop_index].id;
        let operation = move || {
            self.crops.remove(crop_index);
            self.soils[soil_index].crop = None;
            vec![CropDestroyed { crop: id, soil }]
        };
        Ok((id, operation))
    }
}
