//! Error types for Tourguard

use thiserror::Error;

/// Errors raised by the tourist directory and its storage
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A tourist with this (normalized) email is already registered
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking storage task panicked or was cancelled
    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type alias using DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors shown inline by the portal view.
///
/// The display strings are user-facing and rendered verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// One or more registration fields are empty
    #[error("All fields are required")]
    MissingFields,

    /// The login email is empty
    #[error("Email is required")]
    MissingEmail,

    /// No tourist is registered under the login email
    #[error("Tourist not found. Please register first.")]
    TouristNotFound,

    /// The directory rejected the registration
    #[error("{0}")]
    RegistrationFailed(String),
}

impl From<DirectoryError> for PortalError {
    fn from(err: DirectoryError) -> Self {
        PortalError::RegistrationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DirectoryError::EmailTaken("alice@demo.com".to_string());
        assert_eq!(format!("{}", err), "Email already registered: alice@demo.com");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DirectoryError = io_err.into();
        assert!(matches!(err, DirectoryError::Io(_)));
    }

    #[test]
    fn test_portal_messages_are_exact() {
        assert_eq!(PortalError::MissingFields.to_string(), "All fields are required");
        assert_eq!(PortalError::MissingEmail.to_string(), "Email is required");
        assert_eq!(
            PortalError::TouristNotFound.to_string(),
            "Tourist not found. Please register first."
        );
    }

    #[test]
    fn test_directory_error_becomes_registration_failure() {
        let err: PortalError = DirectoryError::EmailTaken("bob@x.io".to_string()).into();
        assert_eq!(
            err,
            PortalError::RegistrationFailed("Email already registered: bob@x.io".to_string())
        );
    }
}
