#![allow(dead_code)]

use datamap::Storage;
use game::api::{Action, ActionError, Event, Report};
use game::config::Configuration;
use game::data::{KNOWLEDGE, SCHEMA};
use game::inventory::{Collection, Good, GoodKey, GoodKind};
use game::math::Timestamp;
use game::model::Selection;
use game::planting::{Crop, CropId, CropKey, Soil, SoilId};
use game::Game;

pub const SEED: u64 = 42;

pub fn new_game() -> Game {
    new_game_with_data("")
}

/// Fresh game over the shipped data edited by `data` statements.
pub fn new_game_with_data(data: &str) -> Game {
    let storage = Storage::open_in_memory().unwrap();
    storage.execute_batch(SCHEMA).unwrap();
    storage.execute_batch(KNOWLEDGE).unwrap();
    storage.execute_batch(data).unwrap();
    let config = Configuration {
        seed: Some(SEED),
        ..Configuration::default()
    };
    let mut game = Game::with_config(storage, config);
    game.load_game_full(0).unwrap();
    game
}

pub struct GameTestScenario {
    pub game: Game,
    current_action_result: Option<Result<Report, ActionError>>,
    state_before_action: String,
}

impl GameTestScenario {
    pub fn new() -> Self {
        Self::with_game(new_game())
    }

    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            current_action_result: None,
            state_before_action: String::new(),
        }
    }

    pub fn crop_key(&self, crop_name: &str) -> CropKey {
        self.game.known.crops.find(crop_name).unwrap().id
    }

    pub fn good(&self, kind: GoodKind, crop_name: &str) -> GoodKey {
        GoodKey::new(kind, self.crop_key(crop_name).0.to_string())
    }

    pub fn seeds(&self, crop_name: &str) -> GoodKey {
        GoodKey::new(GoodKind::Seed, self.crop_key(crop_name).0.to_string())
    }

    pub fn fruits(&self, crop_name: &str) -> GoodKey {
        GoodKey::new(GoodKind::Fruit, self.crop_key(crop_name).0.to_string())
    }

    pub fn crop_at(&self, soil: usize) -> CropId {
        self.game.get_crop_at(SoilId(soil)).unwrap().id
    }

    pub fn fingerprint(&self) -> String {
        format!(
            "{:?}|{:?}|{:?}|{:?}",
            self.game.planting, self.game.inventory, self.game.economy, self.game.browser
        )
    }

    pub fn given_gold(mut self, gold: u32) -> Self {
        self.game.economy.gold = gold;
        self
    }

    pub fn given_level(mut self, level: u32) -> Self {
        self.game.economy.level = level;
        self
    }

    pub fn given_experience(mut self, experience: u32) -> Self {
        self.game.economy.experience = experience;
        self
    }

    pub fn given_next_soil(mut self, soil: Option<usize>) -> Self {
        self.game.economy.next_soil = soil.map(SoilId);
        self
    }

    pub fn given_soils(mut self, soils: &[usize]) -> Self {
        let soils = soils
            .iter()
            .map(|id| Soil {
                id: SoilId(*id),
                level: 1,
                crop: None,
            })
            .collect();
        self.game.planting.load_soils(soils);
        self
    }

    pub fn given_crop(mut self, soil: usize, crop_name: &str, planted_at: Timestamp) -> Self {
        let kind = self.game.known.crops.find(crop_name).unwrap();
        let id = CropId(self.game.planting.crops.len() + 1);
        let crop = Crop {
            id,
            kind,
            soil: SoilId(soil),
            planted_at,
            harvest_count: 1,
            growth_rate: 0.0,
        };
        self.game.planting.load_crops(vec![crop], id.0);
        self
    }

    pub fn given_goods(mut self, kind: GoodKind, crop_name: &str, quantity: u32) -> Self {
        let crop = self.game.known.crops.find(crop_name).unwrap();
        let cost = match kind {
            GoodKind::Seed => crop.seed_cost,
            _ => crop.fruit_cost,
        };
        let good = Good {
            key: GoodKey::new(kind, crop.id.0.to_string()),
            title: crop.name.clone(),
            quantity,
            cost,
        };
        self.game.inventory.load_goods(vec![good]);
        self
    }

    pub fn given_selected(mut self, collection: Collection, kind: GoodKind, crop_name: &str) -> Self {
        let key = self.good(kind, crop_name);
        self.game
            .perform_action(Action::SelectGood { collection, key }, 0)
            .unwrap();
        self
    }

    pub fn when_player_perform<F>(mut self, now: Timestamp, action: F) -> Self
    where
        F: FnOnce(&Self) -> Action,
    {
        let action = action(&self);
        self.state_before_action = self.fingerprint();
        self.current_action_result = Some(self.game.perform_action(action, now));
        self
    }

    pub fn then_action_should_fail<F>(self, expected_error: F) -> Self
    where
        F: FnOnce(&Self) -> ActionError,
    {
        let expected_error = expected_error(&self);
        match &self.current_action_result {
            Some(Err(error)) => assert_eq!(error, &expected_error),
            other => panic!("action should fail with {:?}, got {:?}", expected_error, other),
        }
        assert_eq!(
            self.fingerprint(),
            self.state_before_action,
            "rejected action must not change the game state"
        );
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        match &self.current_action_result {
            Some(Ok(_)) => {}
            other => panic!("action should succeed, got {:?}", other),
        }
        self
    }

    pub fn then_events_should_be<F>(self, expected_events: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Event>,
    {
        let expected_events = expected_events(&self);
        let actual_events = match &self.current_action_result {
            Some(Ok(report)) => &report.events,
            other => panic!("action should succeed, got {:?}", other),
        };
        let actual_events = format!("{:?}", actual_events);
        let expected_events = format!("{:?}", expected_events);
        assert_eq!(actual_events, expected_events);
        self
    }

    pub fn then_gold_should_be(self, gold: u32) -> Self {
        assert_eq!(self.game.economy.gold, gold);
        self
    }

    pub fn then_level_should_be(self, level: u32, experience: u32) -> Self {
        assert_eq!(self.game.economy.level, level);
        assert_eq!(self.game.economy.experience, experience);
        self
    }

    pub fn then_next_soil_should_be(self, soil: Option<usize>) -> Self {
        assert_eq!(self.game.economy.next_soil, soil.map(SoilId));
        self
    }

    pub fn then_good_quantity_should_be(
        self,
        kind: GoodKind,
        crop_name: &str,
        quantity: Option<u32>,
    ) -> Self {
        let key = self.good(kind, crop_name);
        let actual = self
            .game
            .inventory
            .get_good(Collection::Warehouse, &key)
            .ok()
            .map(|good| good.quantity);
        assert_eq!(actual, quantity, "quantity of {:?}", key);
        self
    }

    pub fn then_soil_should_hold(self, soil: usize, crop_name: Option<&str>) -> Self {
        let soil = self.game.get_soil(SoilId(soil)).unwrap();
        let actual = soil.crop.map(|crop| {
            let crop = self.game.planting.get_crop(crop).unwrap();
            assert_eq!(crop.soil, soil.id, "crop must point back to its soil");
            crop.kind.name.clone()
        });
        assert_eq!(actual.as_deref(), crop_name);
        self
    }

    pub fn then_selection_should_be(self, selection: Option<Selection>) -> Self {
        assert_eq!(self.game.browser.selection, selection);
        self
    }

    pub fn then_report_economy_should_match_game(self) -> Self {
        match &self.current_action_result {
            Some(Ok(report)) => assert_eq!(report.economy, self.game.inspect_economy()),
            other => panic!("action should succeed, got {:?}", other),
        }
        self
    }
}
