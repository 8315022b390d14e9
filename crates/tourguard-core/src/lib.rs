//! Tourguard Core Library
//!
//! Tourist registry, sessions and the portal state machine for the
//! smart tourist safety desktop app.
//!
//! ## Overview
//!
//! - [`portal::PortalController`]: UI-free state of the landing / tourist /
//!   admin portal screen
//! - [`directory::TouristDirectory`]: the operations the portal calls out to
//!   (register, login by email, admin login)
//! - [`directory::Directory`]: redb-backed implementation with one active
//!   session
//!
//! ## Quick Start
//!
//! ```ignore
//! use tourguard_core::{Directory, DirectoryConfig, PortalController, RegistrationField};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = Directory::open(&DirectoryConfig::in_dir("~/.tourguard"))?;
//!     let mut portal = PortalController::new();
//!
//!     portal.select_login_tab();
//!     portal.edit_login_email("alice@demo.com".to_string());
//!     if let Some(nav) = portal.submit_login(&directory) {
//!         println!("go to {}", nav.path());
//!     }
//!     Ok(())
//! }
//! ```

pub mod directory;
pub mod error;
pub mod portal;
pub mod storage;
pub mod types;

// Re-exports
pub use directory::{Directory, DirectoryConfig, StorageLocation, TouristDirectory, DEMO_EMAIL};
pub use error::{DirectoryError, DirectoryResult, PortalError};
pub use portal::{Navigation, PortalController, PortalKey, ViewMode};
pub use storage::Storage;
pub use types::*;
