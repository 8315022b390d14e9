//! Persistent storage using redb.
//!
//! Tourists are stored as JSON blobs keyed by their normalized email, so
//! lookup-by-email is a single point read.

use crate::error::DirectoryError;
use crate::types::{normalize_email, Tourist, TouristId};
use parking_lot::RwLock;
use redb::backends::InMemoryBackend;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

// Table definitions
const TOURISTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("tourists");

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and all tables if they don't exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Create a storage instance that lives only in memory.
    pub fn in_memory() -> Result<Self, DirectoryError> {
        let db = Database::builder().create_with_backend(InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> Result<Self, DirectoryError> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(TOURISTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tourist Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Save a tourist, keyed by normalized email.
    ///
    /// An existing record under the same email is overwritten; callers that
    /// need uniqueness check [`Storage::contains_email`] first.
    pub fn save_tourist(&self, tourist: &Tourist) -> Result<(), DirectoryError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(TOURISTS_TABLE)?;
            let data = serde_json::to_vec(tourist)
                .map_err(|e| DirectoryError::Serialization(e.to_string()))?;
            let key = tourist.email_key();
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Save a tourist unless the email is already taken.
    ///
    /// The check and the insert share one write transaction.
    pub fn insert_new_tourist(&self, tourist: &Tourist) -> Result<(), DirectoryError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(TOURISTS_TABLE)?;
            let key = tourist.email_key();
            if table.get(key.as_str())?.is_some() {
                return Err(DirectoryError::EmailTaken(key));
            }
            let data = serde_json::to_vec(tourist)
                .map_err(|e| DirectoryError::Serialization(e.to_string()))?;
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load a tourist by email (normalized before lookup).
    ///
    /// Returns `None` if no tourist is registered under that email.
    pub fn load_tourist_by_email(&self, email: &str) -> Result<Option<Tourist>, DirectoryError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(TOURISTS_TABLE)?;
        let key = normalize_email(email);

        match table.get(key.as_str())? {
            Some(v) => {
                let tourist: Tourist = serde_json::from_slice(v.value())
                    .map_err(|e| DirectoryError::Serialization(e.to_string()))?;
                Ok(Some(tourist))
            }
            None => Ok(None),
        }
    }

    /// Load a tourist by id (full scan).
    pub fn load_tourist(&self, id: &TouristId) -> Result<Option<Tourist>, DirectoryError> {
        Ok(self.list_tourists()?.into_iter().find(|t| t.id == *id))
    }

    /// Check whether an email is registered.
    pub fn contains_email(&self, email: &str) -> Result<bool, DirectoryError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(TOURISTS_TABLE)?;
        let key = normalize_email(email);

        Ok(table.get(key.as_str())?.is_some())
    }

    /// Load all tourists, ordered by registration (ULID order).
    pub fn list_tourists(&self) -> Result<Vec<Tourist>, DirectoryError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(TOURISTS_TABLE)?;

        let mut tourists = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            let tourist: Tourist = serde_json::from_slice(value.value())
                .map_err(|e| DirectoryError::Serialization(e.to_string()))?;
            tourists.push(tourist);
        }
        tourists.sort_by_key(|t| t.id.0);
        Ok(tourists)
    }
}
