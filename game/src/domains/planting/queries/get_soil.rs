use crate::math::Position;
use crate::planting::{PlantingDomain, PlantingError, Soil, SoilId, SpatialIndex};

impl PlantingDomain {
    pub fn get_soil(&self, id: SoilId) -> Result<&Soil, PlantingError> {
        self.soils
            .iter()
            .find(|soil| soil.id == id)
            .ok_or(PlantingError::SoilNotFound { soil: id })
    }

    /// Owned soil under a screen point.
    pub fn get_soil_at<I: SpatialIndex>(&self, index: &I, position: Position) -> Option<&Soil> {
        let id = index.soil_at(position)?;
        self.get_soil(id).ok()
    }
}
