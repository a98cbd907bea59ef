use super::types::{Address, AddressInput};
use crate::error::{AddressError, Result};

use rusqlite::{Connection, OptionalExtension, Row, Transaction, params};
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS addresses (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      address TEXT NOT NULL,
      latitude REAL NOT NULL,
      longitude REAL NOT NULL,
      CONSTRAINT latitude_longitude_uc UNIQUE (latitude, longitude)
    );

    CREATE INDEX IF NOT EXISTS ix_addresses_address ON addresses (address);
"#;

const SELECT_COLUMNS: &str = "SELECT id, address, latitude, longitude FROM addresses";

/// Durable table of address records backed by SQLite.
///
/// One connection is shared by every request. Each operation runs on the
/// blocking thread pool, takes the connection lock and opens its own
/// transaction; both are released when the operation returns, whether it
/// succeeded or not. An uncommitted transaction rolls back on drop.
#[derive(Clone)]
pub struct AddressStore {
    conn: Arc<Mutex<Connection>>,
}

impl AddressStore {
    /// Opens (or creates) the database file at `path` and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=FULL;")?;
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database. Contents vanish with the store.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `op` inside one transaction on the blocking pool and commits it
    /// if `op` succeeds.
    async fn transaction<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Transaction<'_>) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let mut conn = conn
                .lock()
                .map_err(|_| AddressError::Storage("connection lock poisoned".to_string()))?;
            let tx = conn.transaction()?;
            let value = op(&tx)?;
            tx.commit()?;
            Ok(value)
        })
        .await?
    }

    pub async fn insert(&self, input: AddressInput) -> Result<Address> {
        self.transaction(move |tx| {
            tx.execute(
                "INSERT INTO addresses (address, latitude, longitude) VALUES (?1, ?2, ?3)",
                params![input.address, input.latitude, input.longitude],
            )
            .map_err(|e| constraint_error(e, input.latitude, input.longitude))?;

            Ok(Address {
                id: tx.last_insert_rowid(),
                address: input.address,
                latitude: input.latitude,
                longitude: input.longitude,
            })
        })
        .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Address> {
        self.transaction(move |tx| select_by_id(tx, id)?.ok_or(AddressError::NotFound { id }))
            .await
    }

    /// Replaces every field of record `id`.
    ///
    /// Moving a record onto coordinates held by another record violates the
    /// unique constraint and fails with `Conflict`; keeping its own
    /// coordinates is not a collision.
    pub async fn update(&self, id: i64, input: AddressInput) -> Result<Address> {
        self.transaction(move |tx| {
            let mut record = select_by_id(tx, id)?.ok_or(AddressError::NotFound { id })?;
            record.apply(input);

            tx.execute(
                "UPDATE addresses SET address = ?1, latitude = ?2, longitude = ?3 WHERE id = ?4",
                params![record.address, record.latitude, record.longitude, record.id],
            )
            .map_err(|e| constraint_error(e, record.latitude, record.longitude))?;

            Ok(record)
        })
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.transaction(move |tx| {
            let removed = tx.execute("DELETE FROM addresses WHERE id = ?1", params![id])?;
            if removed == 0 {
                return Err(AddressError::NotFound { id });
            }
            Ok(())
        })
        .await
    }

    /// Every stored record in insertion (id) order.
    pub async fn list_all(&self) -> Result<Vec<Address>> {
        self.transaction(|tx| {
            let mut stmt = tx.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
            let records = stmt
                .query_map([], row_to_address)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
    }

    pub async fn count(&self) -> Result<usize> {
        self.transaction(|tx| {
            let count: i64 =
                tx.query_row("SELECT COUNT(*) FROM addresses", [], |row| row.get(0))?;
            Ok(count as usize)
        })
        .await
    }
}

fn select_by_id(tx: &Transaction<'_>, id: i64) -> Result<Option<Address>> {
    let record = tx
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            row_to_address,
        )
        .optional()?;
    Ok(record)
}

fn row_to_address(row: &Row<'_>) -> rusqlite::Result<Address> {
    Ok(Address {
        id: row.get(0)?,
        address: row.get(1)?,
        latitude: row.get(2)?,
        longitude: row.get(3)?,
    })
}

/// Translates a unique-constraint violation on the coordinate pair into
/// `Conflict`; everything else stays a database error.
fn constraint_error(err: rusqlite::Error, latitude: f64, longitude: f64) -> AddressError {
    match err {
        rusqlite::Error::SqliteFailure(ref failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            AddressError::Conflict {
                latitude,
                longitude,
            }
        }
        other => AddressError::Database(other),
    }
}
