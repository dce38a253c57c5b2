use datamap::Storage;
use log::{debug, info};

pub use domains::*;

use crate::api::{Action, ActionError, GameResponse, PlayerRequest, Report};
use crate::config::Configuration;
use crate::data::DataError;
use crate::economy::EconomyDomain;
use crate::inventory::InventoryDomain;
use crate::math::{Random, Timestamp};
use crate::model::{Browser, Knowledge};
use crate::planting::PlantingDomain;

mod actions;
pub mod api;
mod cheats;
pub mod collections;
pub mod config;
pub mod data;
mod domains;
mod inspection;
pub mod math;
pub mod model;
mod update;
pub mod view;

pub struct Game {
    pub known: Knowledge,
    pub config: Configuration,
    pub planting: PlantingDomain,
    pub inventory: InventoryDomain,
    pub economy: EconomyDomain,
    pub browser: Browser,
    random: Random,
    storage: Storage,
    last_update: Timestamp,
}

impl Game {
    pub fn new(storage: Storage) -> Self {
        Self::with_config(storage, Configuration::default())
    }

    pub fn with_config(storage: Storage, config: Configuration) -> Self {
        let random = match config.seed {
            Some(seed) => Random::with_seed(seed),
            None => Random::new(),
        };
        Self {
            known: Knowledge::default(),
            config,
            planting: PlantingDomain::default(),
            inventory: InventoryDomain::default(),
            economy: EconomyDomain::default(),
            browser: Browser::default(),
            random,
            storage,
            last_update: 0,
        }
    }

    /// Gives the storage back, the session is closed without saving.
    pub fn into_storage(self) -> Storage {
        self.storage
    }

    /// Loads static data, then the save made with it.
    pub fn load_game_full(&mut self, now: Timestamp) -> Result<(), DataError> {
        self.load_game_knowledge()?;
        self.load_game_state()?;
        self.last_update = now;
        Ok(())
    }

    pub fn perform_action(&mut self, action: Action, now: Timestamp) -> Result<Report, ActionError> {
        let description = format!("{:?}", action);
        let result = match action {
            Action::BuyGood { count } => self.buy_good(count),
            Action::SellGood { count } => self.sell_good(count),
            Action::PlantSeed { soil } => self.plant_seed(soil, now),
            Action::HarvestCrop { soil } => self.harvest_crop(soil, now),
            Action::ShovelCrop { soil } => self.shovel_crop(soil),
            Action::ExpandLand => self.expand_land(),
            Action::SelectGood { collection, key } => self.select_good(collection, key),
            Action::OpenCollection { collection } => self.open_collection(collection),
            Action::TurnPage { delta } => self.turn_page(delta),
        };
        match result {
            Ok(events) => {
                info!("Action {} performed", description);
                Ok(Report {
                    events,
                    economy: self.inspect_economy(),
                })
            }
            Err(error) => {
                debug!("Action {} rejected: {:?}", description, error);
                Err(error)
            }
        }
    }

    /// Serves a collaborator living in another process.
    pub fn handle_request(&mut self, request: PlayerRequest, now: Timestamp) -> GameResponse {
        match request {
            PlayerRequest::Ping => GameResponse::Pong,
            PlayerRequest::Perform { action_id, action } => {
                match self.perform_action(action, now) {
                    Ok(report) => GameResponse::Performed { action_id, report },
                    Err(error) => GameResponse::Rejected { action_id, error },
                }
            }
            PlayerRequest::Browse { collection, page } => GameResponse::Goods {
                page: self.browse(collection, page),
            },
        }
    }
}

#[macro_export]
macro_rules! occur {
    () => (
        std::vec::Vec::<$crate::api::Event>::new()
    );
    ($($x:expr),+ $(,)?) => (
        vec![$($x.into()),+]
    );
}

