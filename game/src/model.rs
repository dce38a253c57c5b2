use crate::collections::Dictionary;
use crate::economy::{ExpansionKey, ExpansionKind, LevelKey, LevelKind};
use crate::inventory::{Collection, GoodKey};
use crate::planting::{CropKey, CropKind};

#[derive(Default)]
pub struct Knowledge {
    pub crops: Dictionary<CropKey, CropKind>,
    pub expansions: Dictionary<ExpansionKey, ExpansionKind>,
    pub levels: Dictionary<LevelKey, LevelKind>,
}

impl Knowledge {
    /// Experience needed to leave `level`, `None` past the last known level.
    pub fn required_experience(&self, level: u32) -> Option<u32> {
        self.levels
            .get(LevelKey(level as usize))
            .ok()
            .map(|kind| kind.exp)
    }

    /// Plots of a fully expanded farm, one expansion step per plot.
    pub fn total_soils(&self) -> usize {
        self.expansions.len()
    }
}

/// Non-owning reference to the good the player picked.
#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct Selection {
    pub collection: Collection,
    pub key: GoodKey,
}

/// What the player is looking at in the goods dialogs.
#[derive(Debug, Clone, PartialEq)]
pub struct Browser {
    pub collection: Collection,
    pub page: usize,
    pub selection: Option<Selection>,
}

impl Default for Browser {
    fn default() -> Self {
        Self {
            collection: Collection::Shop,
            page: 1,
            selection: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Browsing {
    CollectionOpened {
        collection: Collection,
    },
    PageChanged {
        collection: Collection,
        page: usize,
        total: usize,
    },
    GoodSelected {
        selection: Selection,
    },
    SelectionCleared {
        selection: Selection,
    },
}
