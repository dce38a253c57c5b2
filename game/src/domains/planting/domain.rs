use crate::collections::{Sequence, Shared};
use crate::math::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct CropKey(pub usize);

/// Static growth curve and economy parameters of a crop.
#[derive(Debug)]
pub struct CropKind {
    pub id: CropKey,
    pub name: String,
    /// Player level required to buy the seeds.
    pub level: u32,
    /// Experience granted per harvest.
    pub exp: u32,
    /// Ordered durations of the growing stages in seconds; ripe after the last one.
    pub stages: Vec<u64>,
    pub max_harvest: u8,
    /// Inclusive yield range per harvest.
    pub fruits: [u8; 2],
    pub seed_cost: u32,
    pub fruit_cost: u32,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, bincode::Encode, bincode::Decode,
)]
pub struct SoilId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Soil {
    pub id: SoilId,
    pub level: u8,
    pub crop: Option<CropId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct CropId(pub usize);

#[derive(Debug, Clone)]
pub struct Crop {
    pub id: CropId,
    pub kind: Shared<CropKind>,
    pub soil: SoilId,
    pub planted_at: Timestamp,
    pub harvest_count: u8,
    pub growth_rate: f32,
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Planting {
    SoilCreated {
        soil: SoilId,
        level: u8,
    },
    CropPlanted {
        crop: CropId,
        kind: CropKey,
        soil: SoilId,
        planted_at: Timestamp,
    },
    CropHarvested {
        crop: CropId,
        soil: SoilId,
        fruits: u8,
        harvest_count: u8,
    },
    CropRegrown {
        crop: CropId,
        planted_at: Timestamp,
        harvest_count: u8,
    },
    CropDestroyed {
        crop: CropId,
        soil: SoilId,
    },
    CropRipened {
        crop: CropId,
        soil: SoilId,
    },
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum PlantingError {
    SoilNotFound {
        soil: SoilId,
    },
    CropNotFound {
        crop: CropId,
    },
    DuplicateSoil {
        soil: SoilId,
    },
    OccupiedSoil {
        soil: SoilId,
        crop: CropId,
    },
    EmptySoil {
        soil: SoilId,
    },
    NotReady {
        crop: CropId,
        stage: usize,
        time_to_next: Option<u64>,
    },
}

#[derive(Debug, Default)]
pub struct PlantingDomain {
    pub soils: Vec<Soil>,
    pub crops: Vec<Crop>,
    pub crops_id: Sequence,
}

impl PlantingDomain {
    pub(crate) fn index_soil(&self, id: SoilId) -> Result<usize, PlantingError> {
        self.soils
            .iter()
            .position(|soil| soil.id == id)
            .ok_or(PlantingError::SoilNotFound { soil: id })
    }

    pub(crate) fn index_crop(&self, id: CropId) -> Result<usize, PlantingError> {
        self.crops
            .iter()
            .position(|crop| crop.id == id)
            .ok_or(PlantingError::CropNotFound { crop: id })
    }

    /// Indexes of an occupied soil and of its crop.
    pub(crate) fn index_occupied(&self, id: SoilId) -> Result<(usize, usize), PlantingError> {
        let soil_index = self.index_soil(id)?;
        let crop = self.soils[soil_index]
            .crop
            .ok_or(PlantingError::EmptySoil { soil: id })?;
        let crop_index = self.index_crop(crop)?;
        Ok((soil_index, crop_index))
    }
}
