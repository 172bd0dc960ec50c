use std::cell::{Cell, RefCell};
use std::path::Path;

use thiserror::Error;

use super::database::Database;
use crate::common::Identity;

/// Fixed storage key of the persisted identity record.
pub const IDENTITY_KEY: &str = "trilingo_user";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("failed to serialize identity: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent slot holding the single user record.
///
/// `load` never fails: an absent record and a corrupted one both come back
/// as `None`. A corrupted record is logged and removed.
pub trait IdentityStore {
    fn save(&self, identity: &Identity) -> Result<(), StoreError>;
    fn load(&self) -> Option<Identity>;
    fn clear(&self) -> Result<(), StoreError>;
}

fn parse_record(raw: &str) -> Option<Identity> {
    match serde_json::from_str::<Identity>(raw) {
        Ok(identity) => Some(identity),
        Err(err) => {
            log::warn!("Failed to parse stored identity ({err}); discarding record");
            None
        }
    }
}

/// SQLite-backed store (`<data-dir>/trilingo.db`).
pub struct SqliteIdentityStore {
    db: Database,
}

impl SqliteIdentityStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = Database::new(path)?;
        Ok(Self { db })
    }

    #[cfg(test)]
    pub fn in_memory() -> Result<Self, StoreError> {
        let db = Database::in_memory()?;
        Ok(Self { db })
    }

    /// Raw record access, used to seed corrupted data in tests.
    #[cfg(test)]
    fn write_raw(&self, value: &str) -> Result<(), StoreError> {
        self.db.set_item(IDENTITY_KEY, value)?;
        Ok(())
    }
}

impl IdentityStore for SqliteIdentityStore {
    fn save(&self, identity: &Identity) -> Result<(), StoreError> {
        let json = serde_json::to_string(identity)?;
        self.db.set_item(IDENTITY_KEY, &json)?;
        Ok(())
    }

    fn load(&self) -> Option<Identity> {
        let raw = match self.db.get_item(IDENTITY_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("Failed to read stored identity: {err}");
                return None;
            }
        };

        let identity = parse_record(&raw);
        if identity.is_none() {
            if let Err(err) = self.clear() {
                log::error!("Failed to remove corrupted identity record: {err}");
            }
        }
        identity
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.db.remove_item(IDENTITY_KEY)?;
        Ok(())
    }
}

/// In-memory fake, also used when the SQLite file cannot be opened.
#[derive(Default)]
pub struct MemoryIdentityStore {
    record: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: RefCell::new(Some(raw.into())),
            writes: Cell::new(0),
        }
    }

    /// Number of successful `save` calls.
    #[cfg(test)]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    #[cfg(test)]
    pub fn raw(&self) -> Option<String> {
        self.record.borrow().clone()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn save(&self, identity: &Identity) -> Result<(), StoreError> {
        let json = serde_json::to_string(identity)?;
        *self.record.borrow_mut() = Some(json);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn load(&self) -> Option<Identity> {
        let raw = self.record.borrow().clone()?;
        let identity = parse_record(&raw);
        if identity.is_none() {
            *self.record.borrow_mut() = None;
        }
        identity
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.record.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Identity {
        Identity::new("Ana", "ana@x.com")
    }

    #[test]
    fn load_without_save_returns_none() {
        let store = SqliteIdentityStore::in_memory().unwrap();
        assert_eq!(store.load(), None);
        assert_eq!(store.load(), None);

        let memory = MemoryIdentityStore::new();
        assert_eq!(memory.load(), None);
    }

    #[test]
    fn load_after_save_returns_equal_identity() {
        let store = SqliteIdentityStore::in_memory().unwrap();
        store.save(&ana()).unwrap();
        assert_eq!(store.load(), Some(ana()));
        assert_eq!(store.load(), Some(ana()));
    }

    #[test]
    fn clear_removes_record() {
        let store = SqliteIdentityStore::in_memory().unwrap();
        store.save(&ana()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupted_record_is_discarded() {
        let store = SqliteIdentityStore::in_memory().unwrap();
        store.write_raw("{ definitely not json").unwrap();

        assert_eq!(store.load(), None);
        assert_eq!(store.db.get_item(IDENTITY_KEY).unwrap(), None);
    }

    #[test]
    fn record_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trilingo.db");

        SqliteIdentityStore::open(&path).unwrap().save(&ana()).unwrap();
        let reopened = SqliteIdentityStore::open(&path).unwrap();

        assert_eq!(reopened.load(), Some(ana()));
    }

    #[test]
    fn memory_store_counts_writes_and_drops_bad_records() {
        let store = MemoryIdentityStore::new();
        store.save(&ana()).unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.load(), Some(ana()));

        let broken = MemoryIdentityStore::with_raw("[1, 2");
        assert_eq!(broken.load(), None);
        assert_eq!(broken.raw(), None);
    }
}
