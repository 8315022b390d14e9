//! Directory context provider for Tourguard.
//!
//! The tourist directory is opened once in `App` and handed to every page
//! through `use_context`, instead of living in ambient global state.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let directory = use_directory();
//! if directory.login_tourist(&email) { ... }
//! ```

use std::ops::Deref;
use std::sync::Arc;

use dioxus::prelude::*;
use tourguard_core::{Directory, DirectoryConfig};

/// Shared handle to the tourist directory.
///
/// Compares by pointer so it can be passed as a component prop.
#[derive(Clone)]
pub struct DirectoryHandle(pub Arc<Directory>);

impl PartialEq for DirectoryHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for DirectoryHandle {
    type Target = Directory;

    fn deref(&self) -> &Directory {
        &self.0
    }
}

/// Get the directory configuration for the application.
/// Uses the global config set from command line args.
pub fn get_directory_config() -> DirectoryConfig {
    crate::get_directory_config()
}

/// Hook to access the tourist directory from context.
pub fn use_directory() -> DirectoryHandle {
    use_context::<DirectoryHandle>()
}
