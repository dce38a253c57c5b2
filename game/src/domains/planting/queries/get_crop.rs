use crate::planting::{Crop, CropId, PlantingDomain, PlantingError, SoilId};

impl PlantingDomain {
    pub fn get_crop(&self, id: CropId) -> Result<&Crop, PlantingError> {
        self.crops
            .iter()
            .find(|crop| crop.id == id)
            .ok_or(PlantingError::CropNotFound { crop: id })
    }

    pub fn get_soil_crop(&self, soil: SoilId) -> Result<&Crop, PlantingError> {
        let (_, index) = self.index_occupied(soil)?;
        Ok(&self.crops[index])
    }
}
