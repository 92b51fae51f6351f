//! Employee Repository - Abstract persistence for Employees
//!
//! This trait defines what operations the directory needs.
//! How they're implemented (SQLite, memory) is not our concern here.
//!
//! Uniqueness of [`EmployeeId`] is the store's job: `insert` and
//! `replace_by_id` must reject a colliding id atomically rather than relying
//! on the caller's earlier lookup.

use crate::model::employee::{Employee, EmployeeId, EmployeeRecord};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No employee with this id
    NotFound { id: EmployeeId },
    /// Another employee already holds this id
    DuplicateKey { id: EmployeeId },
    /// Failed to persist or read back
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Employee not found: {}", id)
            }
            RepositoryError::DuplicateKey { id } => {
                write!(f, "Employee id already in use: {}", id)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Employee Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// All methods take `&self`; adapters are shared between request handlers
/// and use interior mutability.
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by business key
    fn find_by_id(&self, id: EmployeeId) -> Result<Option<EmployeeRecord>, RepositoryError>;

    /// List every employee, lowest id first
    fn find_all_ordered_by_id_ascending(&self) -> Result<Vec<EmployeeRecord>, RepositoryError>;

    /// Store a new employee, failing with `DuplicateKey` if the id is taken
    fn insert(&self, employee: Employee) -> Result<EmployeeRecord, RepositoryError>;

    /// Overwrite the employee currently stored under `old_id`
    ///
    /// The record keeps its [`RecordId`](crate::model::employee::RecordId).
    /// Fails with `NotFound` if `old_id` is absent and with `DuplicateKey` if
    /// the new id belongs to a different record.
    fn replace_by_id(
        &self,
        old_id: EmployeeId,
        employee: Employee,
    ) -> Result<EmployeeRecord, RepositoryError>;

    /// Remove one employee. Returns whether anything was removed.
    fn delete_by_id(&self, id: EmployeeId) -> Result<bool, RepositoryError>;

    /// Remove every employee. Returns how many were removed.
    fn delete_all(&self) -> Result<usize, RepositoryError>;

    /// Count all employees
    fn count(&self) -> Result<usize, RepositoryError>;

    /// Check if an employee exists
    fn exists(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}
