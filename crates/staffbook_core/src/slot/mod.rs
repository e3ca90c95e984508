//! Durable key-value slot holding the serialized collection.
//!
//! # Responsibility
//! - Define the storage contract the record store persists through.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - A write replaces the whole value stored under the key.
//! - A read of a never-written key is `Ok(None)`, not an error.

use crate::db::DbError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

mod sqlite;

pub use sqlite::SqliteSlot;

pub type SlotResult<T> = Result<T, SlotError>;

/// Slot transport failure.
#[derive(Debug)]
pub enum SlotError {
    Db(DbError),
    /// Backend refused the write (quota, read-only storage).
    Rejected(String),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Rejected(message) => write!(f, "slot write rejected: {message}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Rejected(_) => None,
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Named-key durable storage.
pub trait DurableSlot {
    fn read(&self, key: &str) -> SlotResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> SlotResult<()>;
}

/// Process-local slot.
///
/// Clones share the same backing map, so a test can keep a handle and inspect
/// what the store wrote, or reopen a store over the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.entries.borrow_mut().insert(key.into(), value.into());
        slot
    }

    /// Returns a handle over the same entries that rejects every write.
    pub fn read_only(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            read_only: true,
        }
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl DurableSlot for MemorySlot {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&mut self, key: &str, value: &str) -> SlotResult<()> {
        if self.read_only {
            return Err(SlotError::Rejected(format!("slot `{key}` is read-only")));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
