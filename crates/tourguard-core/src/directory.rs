//! Tourist directory and session service.
//!
//! [`TouristDirectory`] is the contract the portal view drives: register a
//! tourist, log a tourist in by email, log an admin in. [`Directory`] is the
//! concrete implementation backed by [`Storage`], shared between pages as an
//! `Arc<Directory>`.
//!
//! ## Sessions
//!
//! A directory holds at most one active [`Session`]. Registering or logging a
//! tourist in replaces it; `login_admin` switches it to the admin session.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::DirectoryResult;
use crate::storage::Storage;
use crate::types::{RegistrationForm, Session, Tourist};

/// Email of the demo tourist inserted by [`Directory::seed_demo`].
pub const DEMO_EMAIL: &str = "alice@demo.com";

/// Operations the portal view needs from the application.
#[async_trait]
pub trait TouristDirectory: Send + Sync {
    /// Persist a tourist, make them resolvable by email and sign them in.
    async fn register_tourist(&self, form: RegistrationForm) -> DirectoryResult<Tourist>;

    /// Sign in the tourist registered under `email`.
    ///
    /// Returns false when no such tourist exists.
    fn login_tourist(&self, email: &str) -> bool;

    /// Start an admin session.
    fn login_admin(&self);
}

/// Where the directory keeps its records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// redb file at the given path
    File(PathBuf),
    /// Nothing survives the process
    InMemory,
}

/// Directory configuration
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Backing storage
    pub location: StorageLocation,
    /// Insert the demo tourist on open when missing
    pub seed_demo: bool,
    /// Simulated latency of issuing a digital identity
    pub registration_delay: Duration,
}

impl DirectoryConfig {
    /// Default registration delay used by the desktop app
    pub const DEFAULT_REGISTRATION_DELAY: Duration = Duration::from_millis(800);

    /// File-backed config under `data_dir/tourists.redb`
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            location: StorageLocation::File(data_dir.into().join("tourists.redb")),
            ..Self::default()
        }
    }

    /// In-memory config with no delay, no seed
    pub fn ephemeral() -> Self {
        Self {
            location: StorageLocation::InMemory,
            seed_demo: false,
            registration_delay: Duration::ZERO,
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            location: StorageLocation::InMemory,
            seed_demo: true,
            registration_delay: Self::DEFAULT_REGISTRATION_DELAY,
        }
    }
}

/// Storage-backed tourist directory with a single active session
pub struct Directory {
    storage: Storage,
    session: RwLock<Session>,
    registration_delay: Duration,
}

impl Directory {
    /// Open the directory described by `config`.
    pub fn open(config: &DirectoryConfig) -> DirectoryResult<Self> {
        let storage = match &config.location {
            StorageLocation::File(path) => Storage::new(path)?,
            StorageLocation::InMemory => Storage::in_memory()?,
        };

        let directory = Self::with_storage(storage, config.registration_delay);
        if config.seed_demo {
            directory.seed_demo()?;
        }

        tracing::info!(
            "Tourist directory opened ({:?}, {} tourists)",
            config.location,
            directory.list_tourists()?.len()
        );
        Ok(directory)
    }

    /// Wrap an existing storage instance
    pub fn with_storage(storage: Storage, registration_delay: Duration) -> Self {
        Self {
            storage,
            session: RwLock::new(Session::None),
            registration_delay,
        }
    }

    /// Insert the demo tourist if absent. Safe to call repeatedly.
    pub fn seed_demo(&self) -> DirectoryResult<()> {
        if self.storage.contains_email(DEMO_EMAIL)? {
            return Ok(());
        }

        let alice = Tourist::from_registration(RegistrationForm {
            name: "Alice Johnson".to_string(),
            email: DEMO_EMAIL.to_string(),
            phone: "+1-555-0101".to_string(),
            emergency_contact_name: "Bob Johnson".to_string(),
            emergency_contact_phone: "+1-555-0102".to_string(),
        });
        self.storage.save_tourist(&alice)?;
        tracing::info!("Seeded demo tourist {}", DEMO_EMAIL);
        Ok(())
    }

    /// Current session
    pub fn session(&self) -> Session {
        *self.session.read()
    }

    /// The signed-in tourist, if the session belongs to one
    pub fn current_tourist(&self) -> DirectoryResult<Option<Tourist>> {
        match self.session().tourist_id() {
            Some(id) => self.storage.load_tourist(&id),
            None => Ok(None),
        }
    }

    /// End the current session
    pub fn logout(&self) {
        let previous = std::mem::take(&mut *self.session.write());
        tracing::info!("Session ended ({:?})", previous);
    }

    /// All registered tourists in registration order
    pub fn list_tourists(&self) -> DirectoryResult<Vec<Tourist>> {
        self.storage.list_tourists()
    }

    /// Look up a tourist by email without touching the session
    pub fn find_by_email(&self, email: &str) -> DirectoryResult<Option<Tourist>> {
        self.storage.load_tourist_by_email(email)
    }
}

#[async_trait]
impl TouristDirectory for Directory {
    async fn register_tourist(&self, form: RegistrationForm) -> DirectoryResult<Tourist> {
        if !self.registration_delay.is_zero() {
            tokio::time::sleep(self.registration_delay).await;
        }

        let tourist = Tourist::from_registration(form);
        let storage = self.storage.clone();
        let record = tourist.clone();
        // The write runs to completion even if this future is dropped.
        tokio::task::spawn_blocking(move || storage.insert_new_tourist(&record)).await??;

        *self.session.write() = Session::Tourist(tourist.id);
        tracing::info!(
            "Registered {} as {} ({})",
            tourist.email,
            tourist.id,
            tourist.digital_id
        );
        Ok(tourist)
    }

    fn login_tourist(&self, email: &str) -> bool {
        match self.storage.load_tourist_by_email(email) {
            Ok(Some(tourist)) => {
                *self.session.write() = Session::Tourist(tourist.id);
                tracing::info!("Tourist {} signed in", tourist.id);
                true
            }
            Ok(None) => {
                tracing::warn!("Login rejected: no tourist registered as {}", email);
                false
            }
            Err(e) => {
                tracing::error!("Tourist lookup failed: {}", e);
                false
            }
        }
    }

    fn login_admin(&self) {
        *self.session.write() = Session::Admin;
        tracing::info!("Admin session started");
    }
}
