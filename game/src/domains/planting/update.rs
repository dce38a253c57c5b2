use crate::math::Timestamp;
use crate::planting::Planting::CropRipened;
use crate::planting::{Planting, PlantingDomain};

impl PlantingDomain {
    /// Crops that reached the ripe stage within `(since, now]`.
    pub fn update(&self, since: Timestamp, now: Timestamp) -> Vec<Planting> {
        self.crops
            .iter()
            .filter(|crop| !crop.is_ripe(since) && crop.is_ripe(now))
            .map(|crop| CropRipened {
                crop: crop.id,
                soil: crop.soil,
            })
            .collect()
    }
}
