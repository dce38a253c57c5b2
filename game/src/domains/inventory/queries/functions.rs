use crate::inventory::{Good, GoodKind, InventoryError};

pub type Constructor<T> = fn(usize) -> T;

/// Interprets the good name as the crop kind it was made from.
pub trait GoodQuery {
    fn as_seeds<T>(&self, constructor: Constructor<T>) -> Result<T, InventoryError>;
    fn as_produce<T>(&self, constructor: Constructor<T>) -> Option<T>;
}

impl GoodQuery for Good {
    fn as_seeds<T>(&self, constructor: Constructor<T>) -> Result<T, InventoryError> {
        let wrong_kind = || InventoryError::WrongGoodKind {
            key: self.key.clone(),
            expected: GoodKind::Seed,
        };
        if self.key.kind != GoodKind::Seed {
            return Err(wrong_kind());
        }
        self.key
            .name
            .parse::<usize>()
            .map(constructor)
            .map_err(|_| wrong_kind())
    }

    fn as_produce<T>(&self, constructor: Constructor<T>) -> Option<T> {
        match self.key.kind {
            GoodKind::Seed | GoodKind::Fruit => self.key.name.parse::<usize>().ok().map(constructor),
            GoodKind::Equipment => None,
        }
    }
}
