//! Error taxonomy for directory operations
//!
//! Every variant is a user-correctable input problem except `Repository`,
//! which means the store itself failed.

use staffdb_domain::{EmployeeId, RepositoryError, ValidationError};
use thiserror::Error;

/// Which lookup came back empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    /// Update or delete named an id nobody has
    #[error("Employee not found")]
    Employee { id: EmployeeId },

    /// Search by id matched nothing
    #[error("No employees found")]
    NoMatches { id: EmployeeId },

    /// Listing an empty directory
    #[error("No employees added, add employees through the add function.")]
    EmptyDirectory,
}

/// General directory error type
#[derive(Debug, Error)]
pub enum StaffError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("Employee already exists")]
    Conflict { id: EmployeeId },

    #[error("Database error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for StaffError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateKey { id } => StaffError::Conflict { id },
            RepositoryError::NotFound { id } => StaffError::NotFound(NotFound::Employee { id }),
            other => StaffError::Repository(other),
        }
    }
}

pub type StaffResult<T> = std::result::Result<T, StaffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_becomes_conflict() {
        let err: StaffError = RepositoryError::DuplicateKey {
            id: EmployeeId::new(3),
        }
        .into();

        assert!(matches!(err, StaffError::Conflict { id } if id == EmployeeId::new(3)));
        assert_eq!(err.to_string(), "Employee already exists");
    }

    #[test]
    fn test_repository_not_found_becomes_not_found() {
        let err: StaffError = RepositoryError::NotFound {
            id: EmployeeId::new(3),
        }
        .into();

        assert_eq!(err.to_string(), "Employee not found");
    }

    #[test]
    fn test_persistence_failure_stays_repository_error() {
        let err: StaffError = RepositoryError::PersistenceError {
            message: "disk full".to_string(),
        }
        .into();

        assert!(matches!(err, StaffError::Repository(_)));
        assert_eq!(err.to_string(), "Database error: Persistence error: disk full");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err: StaffError = ValidationError::NameRepeated.into();
        assert_eq!(err.to_string(), "Repeating and duplicate values detected");
    }
}
