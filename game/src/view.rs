use crate::inventory::GoodKey;
use crate::math::Timestamp;
use crate::planting::{CropId, CropKey, SoilId};

/// Player scalars as shown by the status bar.
#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct EconomyView {
    pub gold: u32,
    pub level: u32,
    pub experience: u32,
    /// Experience needed to leave the current level, zero at the level cap.
    pub max_experience: u32,
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct CropView {
    pub crop: CropId,
    pub kind: CropKey,
    pub name: String,
    pub soil: SoilId,
    pub stage: usize,
    pub ripe: bool,
    pub time_to_next: Option<u64>,
    pub ripe_at: Timestamp,
    pub harvest_count: u8,
    pub max_harvest: u8,
}

/// Content of the purchase confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct PurchaseOffer {
    pub key: GoodKey,
    pub title: String,
    pub cost: u32,
    pub level: u32,
    pub enough_level: bool,
    /// Largest count the player can pay for.
    pub affordable: u32,
}

/// Content of the land expansion dialog.
#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct ExpansionOffer {
    pub soil: SoilId,
    pub level: u32,
    pub cost: u32,
    pub enough_level: bool,
    pub enough_gold: bool,
}
