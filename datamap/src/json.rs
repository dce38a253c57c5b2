use rusqlite::types::Type;
use rusqlite::Row;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub fn parse_json_value<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}

pub fn to_json_value<T: Serialize>(value: T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}

/// Reads text columns holding JSON documents.
pub trait JsonColumn {
    fn get_json<T: DeserializeOwned>(&self, index: &str) -> rusqlite::Result<T>;
}

impl<'stmt> JsonColumn for Row<'stmt> {
    fn get_json<T: DeserializeOwned>(&self, index: &str) -> rusqlite::Result<T> {
        let value: String = self.get(index)?;
        serde_json::from_str(&value)
            .map_err(|error| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(error)))
    }
}
