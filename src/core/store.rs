//! SQLite-backed record store.

use std::path::Path;

use hashbrown::HashMap;
use rusqlite::{Connection, OptionalExtension, Row, params};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    record::{Record, RecordDraft},
    types::RecordId,
};

const SELECT_COLUMNS: &str = "SELECT id, name, email, phone, address FROM user_data";

/// Errors returned by [`RecordStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Email or phone is already held by another record.
    #[error("duplicate entry: email or phone already exists")]
    Duplicate {
        /// Conflicting record, when the pre-check found it.
        existing_id: Option<RecordId>,
    },
    /// Underlying SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Records sharing one `(email, phone)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Shared email value; `None` for NULL, which [`Record`] reads as `""`.
    pub email: Option<String>,
    /// Shared phone value; `None` for NULL, which [`Record`] reads as `""`.
    pub phone: Option<String>,
    /// Lowest id in the group; survives deduplication.
    pub keep: RecordId,
    /// Remaining ids, ascending.
    pub remove: Vec<RecordId>,
}

/// Owns the single connection to the `user_data` table.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Opens or creates a store backed by the SQLite file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Opens a store that lives only as long as the process.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    /// Adopts an existing connection, creating `user_data` if it is absent.
    ///
    /// An existing table is used as-is, whatever constraints it was created with.
    pub fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    /// Borrows the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Inserts `draft` unless a record already holds its email or phone.
    ///
    /// The conflict check and the insert share one transaction. A UNIQUE
    /// violation raised by the table itself is reported the same way.
    pub fn insert(&mut self, draft: RecordDraft) -> StoreResult<RecordId> {
        let tx = self.conn.transaction()?;

        let existing: Option<RecordId> = tx
            .query_row(
                "SELECT id FROM user_data WHERE email = ?1 OR phone = ?2 ORDER BY id LIMIT 1",
                params![draft.email, draft.phone],
                |row| row.get(0),
            )
            .optional()?;
        if let Some(existing_id) = existing {
            debug!(existing_id, "rejected duplicate insert");
            return Err(StoreError::Duplicate {
                existing_id: Some(existing_id),
            });
        }

        let inserted = tx.execute(
            "INSERT INTO user_data (name, email, phone, address) VALUES (?1, ?2, ?3, ?4)",
            params![draft.name, draft.email, draft.phone, draft.address],
        );
        match inserted {
            Err(err) if is_unique_violation(&err) => {
                return Err(StoreError::Duplicate { existing_id: None });
            }
            other => {
                other?;
            }
        }

        let id = tx.last_insert_rowid();
        tx.commit()?;
        info!(id, "inserted record");
        Ok(id)
    }

    /// Returns every record in ascending id order.
    pub fn list_all(&self) -> StoreResult<Vec<Record>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;
        let rows = stmt.query_map([], record_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Deletes every record except the lowest id of each `(email, phone)` group.
    pub fn delete_duplicates(&mut self) -> StoreResult<usize> {
        let removed = self.conn.execute(
            "DELETE FROM user_data
             WHERE id NOT IN (
                 SELECT MIN(id) FROM user_data GROUP BY email, phone
             )",
            [],
        )?;
        info!(removed, "deleted duplicate records");
        Ok(removed)
    }

    /// Lists the groups [`RecordStore::delete_duplicates`] would collapse, without mutating.
    pub fn duplicate_groups(&self) -> StoreResult<Vec<DuplicateGroup>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, email, phone FROM user_data ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            let id: RecordId = row.get(0)?;
            let email: Option<String> = row.get(1)?;
            let phone: Option<String> = row.get(2)?;
            Ok((id, email, phone))
        })?;

        let mut by_key: HashMap<(Option<String>, Option<String>), Vec<RecordId>> = HashMap::new();
        for row in rows {
            let (id, email, phone) = row?;
            by_key.entry((email, phone)).or_default().push(id);
        }

        let mut groups: Vec<DuplicateGroup> = by_key
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|((email, phone), ids)| DuplicateGroup {
                email,
                phone,
                keep: ids[0],
                remove: ids[1..].to_vec(),
            })
            .collect();
        groups.sort_by_key(|g| g.keep);
        Ok(groups)
    }

    /// Returns records where any text field contains `keyword`, ignoring ASCII case.
    ///
    /// The keyword is matched literally, whatever its length. An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> StoreResult<Vec<Record>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_COLUMNS}
              WHERE ?1 = ''
                 OR instr(lower(name), lower(?1)) > 0
                 OR instr(lower(email), lower(?1)) > 0
                 OR instr(lower(phone), lower(?1)) > 0
                 OR instr(lower(address), lower(?1)) > 0
              ORDER BY id ASC"
        ))?;
        let rows = stmt.query_map(params![keyword], record_from_row)?;
        let found = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(keyword_len = keyword.len(), hits = found.len(), "search");
        Ok(found)
    }

    /// Number of stored records.
    pub fn count(&self) -> StoreResult<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM user_data", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    // Legacy tables allow NULL email/phone.
    Ok(Record {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        phone: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        address: row.get(4)?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
