use crate::collections::DictionaryError;
use crate::economy::{Economy, EconomyError};
use crate::inventory::{Collection, GoodKey, GoodsPage, Inventory, InventoryError};
use crate::model::{Browsing, Selection};
use crate::planting::{Planting, PlantingError, SoilId};
use crate::view::EconomyView;

#[derive(Debug, PartialEq, bincode::Encode, bincode::Decode)]
pub enum PlayerRequest {
    Ping,
    Perform { action_id: usize, action: Action },
    Browse { collection: Collection, page: isize },
}

impl PlayerRequest {
    pub fn as_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(self, config)
    }

    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<PlayerRequest, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (request, _) = bincode::decode_from_slice(data, config)?;
        Ok(request)
    }
}

#[derive(Debug, PartialEq, bincode::Encode, bincode::Decode)]
pub enum GameResponse {
    Pong,
    Performed { action_id: usize, report: Report },
    Rejected { action_id: usize, error: ActionError },
    Goods { page: GoodsPage },
}

impl GameResponse {
    pub fn as_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        let config = bincode::config::standard();
        bincode::encode_to_vec(self, config)
    }

    #[inline]
    pub fn from_bytes(data: &[u8]) -> Result<GameResponse, bincode::error::DecodeError> {
        let config = bincode::config::standard();
        let (response, _) = bincode::decode_from_slice(data, config)?;
        Ok(response)
    }
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Action {
    /// Buys from the selected shop good.
    BuyGood { count: u32 },
    /// Sells from the selected owned good.
    SellGood { count: u32 },
    /// Plants one of the selected seeds.
    PlantSeed { soil: SoilId },
    HarvestCrop { soil: SoilId },
    ShovelCrop { soil: SoilId },
    ExpandLand,
    SelectGood { collection: Collection, key: GoodKey },
    OpenCollection { collection: Collection },
    TurnPage { delta: isize },
}

/// Outcome of an accepted action.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct Report {
    pub events: Vec<Event>,
    pub economy: EconomyView,
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Event {
    Planting(Vec<Planting>),
    Inventory(Vec<Inventory>),
    Economy(Vec<Economy>),
    Browsing(Vec<Browsing>),
}

impl From<Vec<Planting>> for Event {
    fn from(events: Vec<Planting>) -> Self {
        Self::Planting(events)
    }
}

impl From<Vec<Inventory>> for Event {
    fn from(events: Vec<Inventory>) -> Self {
        Self::Inventory(events)
    }
}

impl From<Vec<Economy>> for Event {
    fn from(events: Vec<Economy>) -> Self {
        Self::Economy(events)
    }
}

impl From<Vec<Browsing>> for Event {
    fn from(events: Vec<Browsing>) -> Self {
        Self::Browsing(events)
    }
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum ActionError {
    Planting(PlantingError),
    Inventory(InventoryError),
    Economy(EconomyError),
    Knowledge(DictionaryError),
    /// Selected good no longer exists in its collection.
    InvalidSelection { selection: Selection },
    NothingSelected,
    WrongCollection { collection: Collection },
}

impl From<PlantingError> for ActionError {
    fn from(error: PlantingError) -> Self {
        Self::Planting(error)
    }
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        Self::Inventory(error)
    }
}

impl From<EconomyError> for ActionError {
    fn from(error: EconomyError) -> Self {
        Self::Economy(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        Self::Knowledge(error)
    }
}
