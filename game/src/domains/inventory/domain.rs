use crate::inventory::InventoryError::GoodNotFound;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum GoodKind {
    Seed,
    Fruit,
    Equipment,
}

impl GoodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoodKind::Seed => "Seed",
            GoodKind::Fruit => "Fruit",
            GoodKind::Equipment => "Equipment",
        }
    }

    pub fn parse(value: &str) -> Option<GoodKind> {
        match value {
            "Seed" => Some(GoodKind::Seed),
            "Fruit" => Some(GoodKind::Fruit),
            "Equipment" => Some(GoodKind::Equipment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub struct GoodKey {
    pub kind: GoodKind,
    pub name: String,
}

impl GoodKey {
    pub fn new(kind: GoodKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct Good {
    pub key: GoodKey,
    pub title: String,
    pub quantity: u32,
    pub cost: u32,
}

/// Shop catalog or one of the views over owned goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum Collection {
    Shop,
    Warehouse,
    SeedBag,
}

impl Collection {
    pub fn is_owned(&self) -> bool {
        matches!(self, Collection::Warehouse | Collection::SeedBag)
    }
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Inventory {
    GoodAdded {
        key: GoodKey,
        quantity: u32,
        cost: u32,
    },
    GoodQuantityChanged {
        key: GoodKey,
        quantity: u32,
    },
    GoodRemoved {
        key: GoodKey,
    },
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum InventoryError {
    GoodNotFound {
        collection: Collection,
        key: GoodKey,
    },
    InsufficientQuantity {
        key: GoodKey,
        quantity: u32,
        requested: u32,
    },
    InvalidQuantity {
        key: GoodKey,
    },
    WrongGoodKind {
        key: GoodKey,
        expected: GoodKind,
    },
}

#[derive(Debug, Default)]
pub struct InventoryDomain {
    /// Catalog, never reduced by purchases.
    pub shop: Vec<Good>,
    /// Owned goods in acquisition order, shared by warehouse and seed bag.
    pub goods: Vec<Good>,
}

impl InventoryDomain {
    pub fn load_shop(&mut self, goods: Vec<Good>) {
        self.shop.extend(goods);
    }

    pub fn load_goods(&mut self, goods: Vec<Good>) {
        for good in goods {
            match self.goods.iter_mut().find(|owned| owned.key == good.key) {
                Some(owned) => owned.quantity = owned.quantity.saturating_add(good.quantity),
                None => self.goods.push(good),
            }
        }
    }

    pub fn collection(&self, collection: Collection) -> &[Good] {
        match collection {
            Collection::Shop => &self.shop,
            Collection::Warehouse | Collection::SeedBag => &self.goods,
        }
    }

    pub fn get_good(&self, collection: Collection, key: &GoodKey) -> Result<&Good, InventoryError> {
        self.collection(collection)
            .iter()
            .find(|good| &good.key == key)
            .ok_or_else(|| GoodNotFound {
                collection,
                key: key.clone(),
            })
    }

    pub(crate) fn index_good(&self, key: &GoodKey) -> Result<usize, InventoryError> {
        self.goods
            .iter()
            .position(|good| &good.key == key)
            .ok_or_else(|| GoodNotFound {
                collection: Collection::Warehouse,
                key: key.clone(),
            })
    }
}
