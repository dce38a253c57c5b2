use rusqlite::{params, Connection, Params, Row, Transaction};

use log::info;
use serde_json::Value;
use std::path::Path;

/// Name of the table holding scalar save values.
pub const VALUES_TABLE: &str = "Value";

pub struct Storage {
    connection: Connection,
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        info!("Open storage {}", path.as_ref().display());
        Connection::open(path.as_ref()).map(|connection| Storage { connection })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(|connection| Storage { connection })
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn execute_batch(&self, script: &str) -> rusqlite::Result<()> {
        self.connection.execute_batch(script)
    }

    pub fn has_table(&self, table: &str) -> rusqlite::Result<bool> {
        let mut statement = self
            .connection
            .prepare("select count(*) from sqlite_master where type = 'table' and name = ?")?;
        let count: i64 = statement.query_row([table], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Maps every row of the table named after `T` (last path segment of its type).
    pub fn find_all<T, E, M>(&self, map: M) -> Result<Vec<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let table = table_name::<T>();
        self.select(table, "", [], map)
    }

    pub fn select<T, E, P, M>(
        &self,
        table: &str,
        clause: &str,
        params: P,
        mut map: M,
    ) -> Result<Vec<T>, E>
    where
        P: Params,
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let mut statement = self
            .connection
            .prepare(&format!("select * from {} {}", table, clause))?;
        let mut rows = statement.query(params)?;
        let mut values = vec![];
        while let Some(row) = rows.next()? {
            values.push(map(row)?);
        }
        Ok(values)
    }

    pub fn get_value(&self, key: &str) -> rusqlite::Result<Option<Value>> {
        let mut statement = self
            .connection
            .prepare(&format!("select value from {} where key = ?", VALUES_TABLE))?;
        let mut rows = statement.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    pub fn set_value(&self, key: &str, value: &Value) -> rusqlite::Result<()> {
        put_value(&self.connection, key, value)
    }

    /// Runs all statements of `operation` in one transaction.
    ///
    /// Nothing is written unless the operation returns `Ok`, so a failed
    /// flush leaves the previous save untouched.
    pub fn write<F, E>(&mut self, operation: F) -> Result<(), E>
    where
        F: FnOnce(&Transaction) -> Result<(), E>,
        E: From<rusqlite::Error>,
    {
        let transaction = self.connection.transaction()?;
        operation(&transaction)?;
        transaction.commit()?;
        Ok(())
    }
}

pub fn put_value(connection: &Connection, key: &str, value: &Value) -> rusqlite::Result<()> {
    connection.execute(
        &format!(
            "insert or replace into {} (key, value) values (?, ?)",
            VALUES_TABLE
        ),
        params![key, value],
    )?;
    Ok(())
}

#[inline]
pub fn table_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Plot {
        id: i64,
        level: u8,
    }

    fn storage() -> Storage {
        let storage = Storage::open_in_memory().unwrap();
        storage
            .execute_batch(
                "create table Value (key text primary key, value text not null);
                 create table Plot (id integer primary key, level integer not null);
                 insert into Plot (id, level) values (1, 1), (2, 3);",
            )
            .unwrap();
        storage
    }

    #[test]
    fn test_missing_value_is_none() {
        let storage = storage();
        assert_eq!(storage.get_value("gold").unwrap(), None);
    }

    #[test]
    fn test_value_overwrite() {
        let storage = storage();
        storage.set_value("gold", &json!(10)).unwrap();
        storage.set_value("gold", &json!(25)).unwrap();
        assert_eq!(storage.get_value("gold").unwrap(), Some(json!(25)));
    }

    #[test]
    fn test_find_all_by_type_name() {
        let storage = storage();
        let plots: Vec<Plot> = storage
            .find_all(|row| -> rusqlite::Result<Plot> {
                Ok(Plot {
                    id: row.get("id")?,
                    level: row.get("level")?,
                })
            })
            .unwrap();
        assert_eq!(plots.len(), 2);
        assert_eq!(plots[1].id, 2);
        assert_eq!(plots[1].level, 3);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut storage = storage();
        let result = storage.write(|transaction| {
            put_value(transaction, "gold", &json!(100))?;
            transaction.execute("insert into Missing (id) values (1)", [])?;
            Ok::<(), rusqlite::Error>(())
        });
        assert!(result.is_err());
        assert_eq!(storage.get_value("gold").unwrap(), None);
    }

    #[test]
    fn test_write_commits_all_statements() {
        let mut storage = storage();
        storage
            .write(|transaction| {
                put_value(transaction, "gold", &json!(100))?;
                transaction.execute("delete from Plot", [])?;
                Ok::<(), rusqlite::Error>(())
            })
            .unwrap();
        assert_eq!(storage.get_value("gold").unwrap(), Some(json!(100)));
        assert!(storage.has_table("Plot").unwrap());
    }
}
