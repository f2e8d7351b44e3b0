//! Shared primitive IDs.

/// Surrogate record identifier assigned by SQLite (`INTEGER PRIMARY KEY AUTOINCREMENT`).
pub type RecordId = i64;
