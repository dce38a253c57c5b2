use log::{info, warn};
use rusqlite::{params, Row};
use serde::de::DeserializeOwned;
use serde_json::Value;

use datamap::{parse_json_value, put_value, to_json_value, JsonColumn};

use crate::collections::{DictionaryError, Shared};
use crate::economy::{ExpansionKey, ExpansionKind, LevelKey, LevelKind};
use crate::inventory::{Good, GoodKey, GoodKind};
use crate::planting::{Crop, CropId, CropKey, CropKind, Soil, SoilId};
use crate::Game;

pub const SCHEMA: &str = include_str!("../assets/schema.sql");
pub const KNOWLEDGE: &str = include_str!("../assets/knowledge.sql");
/// Starting purse of a new farm, existing saves keep their own values.
pub const STARTER: &str = include_str!("../assets/starter.sql");

pub const GOLD: &str = "gold";
pub const LEVEL: &str = "level";
pub const EXPERIENCE: &str = "experience";
pub const NEXT_SOIL: &str = "nextExpandableSoilId";
pub const SHOP_LIST: &str = "seed_shop_list";

/// Values used when a key was never saved. The expansion counter is absent
/// here, it starts at the last plot of the expansion table.
pub const DEFAULT_VALUES: &[(&str, &str)] = &[
    (GOLD, "0"),
    (LEVEL, "1"),
    (EXPERIENCE, "0"),
    (SHOP_LIST, "\"1,2,3,4,5,6\""),
];

pub fn default_value(key: &str) -> Option<Value> {
    DEFAULT_VALUES
        .iter()
        .find(|(name, _)| *name == key)
        .and_then(|(_, value)| serde_json::from_str(value).ok())
}

impl Game {
    pub fn load_game_knowledge(&mut self) -> Result<(), DataError> {
        info!("Begin game knowledge loading");
        let crops = self.storage.find_all(|row| self.load_crop_kind(row))?;
        for kind in crops {
            self.known.crops.insert(kind.id, kind.name.clone(), kind);
        }
        let expansions = self
            .storage
            .find_all(|row| self.load_expansion_kind(row))?;
        for kind in expansions {
            self.known
                .expansions
                .insert(kind.id, kind.id.0.to_string(), kind);
        }
        let levels = self.storage.find_all(|row| self.load_level_kind(row))?;
        for kind in levels {
            self.known.levels.insert(kind.id, kind.id.0.to_string(), kind);
        }
        for step in 1..=self.known.total_soils() {
            self.known.expansions.get(ExpansionKey(step))?;
        }
        info!(
            "End game knowledge loading: {} crops, {} expansions, {} levels",
            self.known.crops.len(),
            self.known.expansions.len(),
            self.known.levels.len()
        );
        Ok(())
    }

    pub fn load_game_state(&mut self) -> Result<(), DataError> {
        info!("Begin game state loading");
        let gold = self.read_value(GOLD)?;
        let level = self.read_value(LEVEL)?;
        let experience = self.read_value(EXPERIENCE)?;
        let next_soil = self.read_next_soil()?;
        self.economy.load(gold, level, experience, next_soil);

        let rows = self
            .storage
            .select("Soil", "order by id", [], |row| self.load_soil(row))?;
        let mut soils = Vec::with_capacity(rows.len());
        let mut crops = vec![];
        for (soil, crop) in rows {
            if let Some(crop) = crop {
                crops.push(crop);
            }
            soils.push(soil);
        }
        self.planting.load_soils(soils);
        self.planting.load_crops(crops, 0);

        let shop = self.load_shop()?;
        self.inventory.load_shop(shop);
        let goods = self
            .storage
            .select("Good", "order by position", [], |row| self.load_good(row))?;
        self.inventory.load_goods(goods);
        info!(
            "End game state loading: {} soils, {} crops, {} goods",
            self.planting.soils.len(),
            self.planting.crops.len(),
            self.inventory.goods.len()
        );
        Ok(())
    }

    /// Flushes the whole session in one transaction.
    pub fn save_game(&mut self) -> Result<(), DataError> {
        let economy = &self.economy;
        let planting = &self.planting;
        let inventory = &self.inventory;
        self.storage.write(|transaction| {
            put_value(transaction, GOLD, &to_json_value(economy.gold)?)?;
            put_value(transaction, LEVEL, &to_json_value(economy.level)?)?;
            put_value(transaction, EXPERIENCE, &to_json_value(economy.experience)?)?;
            put_value(transaction, NEXT_SOIL, &to_json_value(economy.next_soil_value())?)?;
            transaction.execute("delete from Soil", [])?;
            for soil in &planting.soils {
                let crop = soil.crop.and_then(|crop| planting.get_crop(crop).ok());
                transaction.execute(
                    "insert into Soil (id, level, crop, planted_at, harvest_count, growth_rate) values (?, ?, ?, ?, ?, ?)",
                    params![
                        soil.id.0 as i64,
                        soil.level,
                        crop.map(|crop| crop.kind.id.0 as i64),
                        crop.map(|crop| crop.planted_at as i64),
                        crop.map(|crop| crop.harvest_count),
                        crop.map(|crop| crop.growth_rate as f64),
                    ],
                )?;
            }
            transaction.execute("delete from Good", [])?;
            for (position, good) in inventory.goods.iter().enumerate() {
                transaction.execute(
                    "insert into Good (position, kind, name, quantity, cost) values (?, ?, ?, ?, ?)",
                    params![
                        position as i64,
                        good.key.kind.as_str(),
                        good.key.name,
                        good.quantity,
                        good.cost
                    ],
                )?;
            }
            Ok::<(), DataError>(())
        })?;
        info!(
            "Game saved: {} soils, {} goods",
            planting.soils.len(),
            inventory.goods.len()
        );
        Ok(())
    }

    pub(crate) fn read_value<T: DeserializeOwned>(&self, key: &str) -> Result<T, DataError> {
        let value = match self.storage.get_value(key)? {
            Some(value) => value,
            None => default_value(key).ok_or_else(|| DataError::Malformed {
                reason: format!("value {} not found", key),
            })?,
        };
        let value = parse_json_value(value)?;
        Ok(value)
    }

    /// Counter of the next plot to unlock, `-1` once every plot is bought.
    pub(crate) fn read_next_soil(&self) -> Result<i64, DataError> {
        let total = self.known.total_soils() as i64;
        let next_soil = match self.storage.get_value(NEXT_SOIL)? {
            Some(value) => parse_json_value(value)?,
            None => total - 1,
        };
        if next_soil < -1 || next_soil >= total {
            return Err(DataError::Malformed {
                reason: format!("{} {} is out of {} plots", NEXT_SOIL, next_soil, total),
            });
        }
        Ok(next_soil)
    }

    pub(crate) fn load_crop_kind(&self, row: &Row) -> Result<CropKind, DataError> {
        let data = CropKind {
            id: CropKey(row.get("id")?),
            name: row.get("name")?,
            level: row.get("level")?,
            exp: row.get("exp")?,
            stages: row.get_json("stages")?,
            max_harvest: row.get("max_harvest")?,
            fruits: [row.get("fruits_min")?, row.get("fruits_max")?],
            seed_cost: row.get("seed_cost")?,
            fruit_cost: row.get("fruit_cost")?,
        };
        Ok(data)
    }

    pub(crate) fn load_expansion_kind(&self, row: &Row) -> Result<ExpansionKind, DataError> {
        let data = ExpansionKind {
            id: ExpansionKey(row.get("id")?),
            level: row.get("level")?,
            cost: row.get("cost")?,
        };
        Ok(data)
    }

    pub(crate) fn load_level_kind(&self, row: &Row) -> Result<LevelKind, DataError> {
        let data = LevelKind {
            id: LevelKey(row.get("id")?),
            exp: row.get("exp")?,
        };
        Ok(data)
    }

    /// Soil row with the crop growing on it, crops of unknown kinds are dropped.
    pub(crate) fn load_soil(&self, row: &Row) -> Result<(Soil, Option<Crop>), DataError> {
        let id = SoilId(row.get("id")?);
        let soil = Soil {
            id,
            level: row.get("level")?,
            crop: None,
        };
        let kind: Option<usize> = row.get("crop")?;
        let crop = match kind {
            None => None,
            Some(kind) => match self.known.crops.get(CropKey(kind)) {
                Ok(kind) => {
                    let planted_at: i64 = row.get("planted_at")?;
                    Some(Crop {
                        id: CropId(id.0 + 1),
                        kind,
                        soil: id,
                        planted_at: planted_at.max(0) as u64,
                        harvest_count: row.get::<_, Option<u8>>("harvest_count")?.unwrap_or(1),
                        growth_rate: row.get::<_, Option<f64>>("growth_rate")?.unwrap_or(0.0)
                            as f32,
                    })
                }
                Err(error) => {
                    warn!("Skip crop of soil {:?}: {:?}", id, error);
                    None
                }
            },
        };
        Ok((soil, crop))
    }

    pub(crate) fn load_good(&self, row: &Row) -> Result<Good, DataError> {
        let kind: String = row.get("kind")?;
        let kind = GoodKind::parse(&kind).ok_or_else(|| DataError::Malformed {
            reason: format!("unknown good kind {}", kind),
        })?;
        let name: String = row.get("name")?;
        let data = Good {
            title: self.good_title(kind, &name),
            key: GoodKey::new(kind, name),
            quantity: row.get("quantity")?,
            cost: row.get("cost")?,
        };
        Ok(data)
    }

    /// Shop catalog from the configured list of crop ids.
    pub(crate) fn load_shop(&self) -> Result<Vec<Good>, DataError> {
        let list: String = self.read_value(SHOP_LIST)?;
        let mut shop = vec![];
        for entry in list.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let kind = match entry.parse::<usize>() {
                Ok(id) => self.known.crops.get(CropKey(id)),
                Err(_) => {
                    warn!("Skip shop entry {:?}: not a crop id", entry);
                    continue;
                }
            };
            match kind {
                Ok(kind) => shop.push(self.seed_good(&kind)),
                Err(error) => warn!("Skip shop entry {:?}: {:?}", entry, error),
            }
        }
        Ok(shop)
    }

    pub(crate) fn seed_good(&self, kind: &Shared<CropKind>) -> Good {
        Good {
            key: GoodKey::new(GoodKind::Seed, kind.id.0.to_string()),
            title: self.good_title(GoodKind::Seed, &kind.id.0.to_string()),
            quantity: self.config.shop_stock,
            cost: kind.seed_cost,
        }
    }

    pub(crate) fn good_title(&self, kind: GoodKind, name: &str) -> String {
        let crop = name
            .parse::<usize>()
            .ok()
            .and_then(|id| self.known.crops.get(CropKey(id)).ok());
        match (kind, crop) {
            (GoodKind::Seed, Some(crop)) => format!("{} seeds", crop.name),
            (GoodKind::Fruit, Some(crop)) => crop.name.clone(),
            _ => name.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Sql(rusqlite::Error),
    Inconsistency(DictionaryError),
    Malformed { reason: String },
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<rusqlite::Error> for DataError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}
