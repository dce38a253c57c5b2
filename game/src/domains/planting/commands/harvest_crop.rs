use crate::collections::Shared;
use crate::math::{Random, Timestamp};
use crate::planting::Planting::{CropDestroyed, CropHarvested, CropRegrown};
use crate::planting::PlantingError::NotReady;
use crate::planting::{CropId, CropKind, Planting, PlantingDomain, PlantingError, SoilId};

pub struct Harvest {
    pub crop: CropId,
    pub kind: Shared<CropKind>,
    pub fruits: u8,
    /// Last permitted harvest, the crop leaves the soil.
    pub exhausted: bool,
}

impl PlantingDomain {
    pub fn harvest_crop<'operation>(
        &'operation mut self,
        soil: SoilId,
        now: Timestamp,
        random: &mut Random,
    ) -> Result<(Harvest, impl FnOnce() -> Vec<Planting> + 'operation), PlantingError> {
        let (soil_index, crop_index) = self.index_occupied(soil)?;
        let crop = &self.crops[crop_index];
        let stage = crop.stage(now);
        if !stage.ripe {
            return Err(NotReady {
                crop: crop.id,
                stage: stage.index,
                time_to_next: stage.time_to_next,
            });
        }
        let [min, max] = crop.kind.fruits;
        let harvest = Harvest {
            crop: crop.id,
            kind: crop.kind.clone(),
            fruits: random.between(min, max),
            exhausted: crop.harvest_count >= crop.kind.max_harvest,
        };
        let id = harvest.crop;
        let fruits = harvest.fruits;
        let exhausted = harvest.exhausted;
        let operation = move || {
            let harvest_count = self.crops[crop_index].harvest_count;
            let mut events = vec![CropHarvested {
                crop: id,
                soil,
                fruits,
                harvest_count,
            }];
            if exhausted {
                self.crops.remove(crop_index);
                self.soils[soil_index].crop = None;
                events.push(CropDestroyed { crop: id, soil });
            } else {
                let crop = &mut self.crops[crop_index];
                crop.planted_at = now;
                crop.harvest_count = crop.harvest_count.saturating_add(1);
                events.push(CropRegrown {
                    crop: id,
                    planted_at: now,
                    harvest_count: crop.harvest_count,
                });
            }
            events
        };
        Ok((harvest, operation))
    }
}
