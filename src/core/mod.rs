//! Persistent record store.

/// SQLite record store with uniqueness checks, deduplication, and search.
pub mod store;
