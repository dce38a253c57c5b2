use crate::api::ActionError;
use crate::collections::Shared;
use crate::economy::{EconomyError, ExpansionKey, ExpansionKind};
use crate::inventory::{Collection, Good, GoodQuery, GoodsPage};
use crate::math::{Position, Timestamp};
use crate::planting::{Crop, CropKey, PlantingError, Soil, SoilId, SpatialIndex};
use crate::view::{CropView, EconomyView, ExpansionOffer, PurchaseOffer};
use crate::Game;

impl Game {
    pub fn inspect_economy(&self) -> EconomyView {
        EconomyView {
            gold: self.economy.gold,
            level: self.economy.level,
            experience: self.economy.experience,
            max_experience: self
                .known
                .required_experience(self.economy.level)
                .unwrap_or(0),
        }
    }

    pub fn get_soil(&self, soil: SoilId) -> Result<&Soil, PlantingError> {
        self.planting.get_soil(soil)
    }

    pub fn get_soil_at<I: SpatialIndex>(&self, index: &I, position: Position) -> Option<&Soil> {
        self.planting.get_soil_at(index, position)
    }

    pub fn get_crop_at(&self, soil: SoilId) -> Option<&Crop> {
        self.planting.get_soil_crop(soil).ok()
    }

    pub fn inspect_crop(&self, soil: SoilId, now: Timestamp) -> Result<CropView, PlantingError> {
        let crop = self.planting.get_soil_crop(soil)?;
        let stage = crop.stage(now);
        Ok(CropView {
            crop: crop.id,
            kind: crop.kind.id,
            name: crop.kind.name.clone(),
            soil,
            stage: stage.index,
            ripe: stage.ripe,
            time_to_next: stage.time_to_next,
            ripe_at: crop.ripe_at(),
            harvest_count: crop.harvest_count,
            max_harvest: crop.kind.max_harvest,
        })
    }

    /// Page of a collection, turning circularly past either end.
    pub fn browse(&self, collection: Collection, page: isize) -> GoodsPage {
        self.inventory
            .page(collection, page, self.config.page_size)
    }

    /// Page the player is currently looking at.
    pub fn current_page(&self) -> GoodsPage {
        self.browse(self.browser.collection, self.browser.page as isize)
    }

    /// Good behind the selection, `None` once it left its collection.
    pub fn selected_good(&self) -> Option<&Good> {
        let selection = self.browser.selection.as_ref()?;
        self.inventory
            .get_good(selection.collection, &selection.key)
            .ok()
    }

    pub fn purchase_offer(&self) -> Result<PurchaseOffer, ActionError> {
        let good = self.ensure_selected_good(false)?;
        let level = match good.as_produce(CropKey) {
            Some(crop) => self.known.crops.get(crop)?.level,
            None => 0,
        };
        Ok(PurchaseOffer {
            affordable: self.economy.affordable(good.cost),
            enough_level: self.economy.level >= level,
            key: good.key,
            title: good.title,
            cost: good.cost,
            level,
        })
    }

    pub fn expansion_offer(&self) -> Result<ExpansionOffer, ActionError> {
        let (soil, kind) = self.next_expansion()?;
        Ok(ExpansionOffer {
            soil,
            level: kind.level,
            cost: kind.cost,
            enough_level: self.economy.level >= kind.level,
            enough_gold: self.economy.gold >= kind.cost,
        })
    }

    /// Soil to unlock and the price of that step.
    pub(crate) fn next_expansion(
        &self,
    ) -> Result<(SoilId, Shared<ExpansionKind>), ActionError> {
        let soil = self.economy.next_soil.ok_or(EconomyError::LandExhausted)?;
        let step = self.known.total_soils().saturating_sub(soil.0);
        let kind = self.known.expansions.get(ExpansionKey(step))?;
        Ok((soil, kind))
    }
}
