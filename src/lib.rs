//! Contact records in SQLite with duplicate rejection, deduplication, and keyword search.
//!
//! # Examples
//!
//! ```
//! use dedupdb::{
//!     core::store::{RecordStore, StoreError},
//!     record::RecordDraft,
//! };
//!
//! let mut store = RecordStore::open_in_memory().expect("open");
//! let id = store
//!     .insert(RecordDraft::new("Alice", "a@x.com", "111", Some("NYC")))
//!     .expect("insert");
//! assert_eq!(id, 1);
//!
//! let dup = store.insert(RecordDraft::new("Bob", "a@x.com", "222", None));
//! assert!(matches!(dup, Err(StoreError::Duplicate { existing_id: Some(1) })));
//!
//! assert_eq!(store.search("a@x").expect("search").len(), 1);
//! ```
//!
//! Interactive session over scripted input:
//! ```
//! use dedupdb::{core::store::RecordStore, shell::Shell};
//!
//! let store = RecordStore::open_in_memory().expect("open");
//! let input = "2\n5\n".as_bytes();
//! let mut out = Vec::new();
//! Shell::new(store, input, &mut out, false).run().expect("run");
//! assert!(String::from_utf8_lossy(&out).contains("No data found"));
//! ```
#![deny(missing_docs)]

/// Startup configuration.
pub mod config;
/// SQLite record store.
pub mod core;
/// Table rendering.
pub mod present;
/// Contact record types.
pub mod record;
/// Interactive menu loop.
pub mod shell;
/// Shared primitive types.
pub mod types;
