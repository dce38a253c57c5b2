use crate::planting::SoilId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct ExpansionKey(pub usize);

/// Price of one land expansion step.
#[derive(Debug)]
pub struct ExpansionKind {
    pub id: ExpansionKey,
    pub level: u32,
    pub cost: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct LevelKey(pub usize);

/// Experience required to leave the level.
#[derive(Debug)]
pub struct LevelKind {
    pub id: LevelKey,
    pub exp: u32,
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Economy {
    GoldChanged {
        gold: u32,
    },
    ExperienceChanged {
        experience: u32,
        max_experience: u32,
    },
    LevelChanged {
        level: u32,
    },
    ExpansionAdvanced {
        soil: SoilId,
        next: Option<SoilId>,
    },
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum EconomyError {
    InsufficientFunds {
        cost: u32,
        gold: u32,
        affordable: u32,
    },
    InsufficientLevel {
        required: u32,
        level: u32,
    },
    LandExhausted,
}

/// Player scalars of the save.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomyDomain {
    pub gold: u32,
    pub level: u32,
    pub experience: u32,
    /// Next soil to unlock, `None` once every plot is owned.
    pub next_soil: Option<SoilId>,
}

impl Default for EconomyDomain {
    fn default() -> Self {
        Self {
            gold: 0,
            level: 1,
            experience: 0,
            next_soil: Some(SoilId(11)),
        }
    }
}

impl EconomyDomain {
    pub fn load(&mut self, gold: u32, level: u32, experience: u32, next_soil: i64) {
        self.gold = gold;
        self.level = level.max(1);
        self.experience = experience;
        self.next_soil = if next_soil < 0 {
            None
        } else {
            Some(SoilId(next_soil as usize))
        };
    }

    /// Persisted form of the expansion counter, `-1` when exhausted.
    pub fn next_soil_value(&self) -> i64 {
        match self.next_soil {
            Some(soil) => soil.0 as i64,
            None => -1,
        }
    }

    /// Maximum number of units purchasable at the price.
    pub fn affordable(&self, price: u32) -> u32 {
        if price == 0 {
            u32::MAX
        } else {
            self.gold / price
        }
    }
}
