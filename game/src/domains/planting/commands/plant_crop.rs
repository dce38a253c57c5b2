use crate::collections::Shared;
use crate::math::Timestamp;
use crate::planting::Planting::CropPlanted;
use crate::planting::PlantingError::OccupiedSoil;
use crate::planting::{Crop, CropId, CropKind, Planting, PlantingDomain, PlantingError, SoilId};

impl PlantingDomain {
    pub fn plant_crop<'operation>(
        &'operation mut self,
        soil: SoilId,
        kind: &Shared<CropKind>,
        planted_at: Timestamp,
        growth_rate: f32,
    ) -> Result<(CropId, impl FnOnce() -> Vec<Planting> + 'operation), PlantingError> {
        let soil_index = self.index_soil(soil)?;
        if let Some(crop) = self.soils[soil_index].crop {
            return Err(OccupiedSoil { soil, crop });
        }
        let id = self.crops_id.introduce().one(CropId);
        let crop = Crop {
            id,
            kind: kind.clone(),
            soil,
            planted_at,
            harvest_count: 1,
            growth_rate,
        };
        let operation = move || {
            let events = vec![CropPlanted {
                crop: id,
                kind: crop.kind.id,
                soil,
                planted_at,
            }];
            self.crops_id.register(id.0);
            self.soils[soil_index].crop = Some(id);
            self.crops.push(crop);
            events
        };
        Ok((id, operation))
    }
}
