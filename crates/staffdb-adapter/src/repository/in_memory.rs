//! In-Memory Repository Implementation
//!
//! Simple in-memory implementation of the employee repository.
//! Useful for testing, demos, and `--in-memory` runs.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use staffdb_domain::{
    Employee, EmployeeId, EmployeeRecord, EmployeeRepository, RecordId, RepositoryError,
};
use uuid::Uuid;

type EmployeeMap = BTreeMap<EmployeeId, EmployeeRecord>;

/// In-memory Employee Repository
///
/// Thread-safe implementation using RwLock. Keyed by [`EmployeeId`] so
/// iteration order is already ascending by id, and every write happens under
/// one lock so uniqueness checks and mutations are atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<EmployeeMap>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            employees: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, EmployeeMap>, RepositoryError> {
        self.employees
            .read()
            .map_err(|_| RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, EmployeeMap>, RepositoryError> {
        self.employees
            .write()
            .map_err(|_| RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            })
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_by_id(&self, id: EmployeeId) -> Result<Option<EmployeeRecord>, RepositoryError> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn find_all_ordered_by_id_ascending(&self) -> Result<Vec<EmployeeRecord>, RepositoryError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn insert(&self, employee: Employee) -> Result<EmployeeRecord, RepositoryError> {
        let mut employees = self.write()?;
        let id = employee.id();
        if employees.contains_key(&id) {
            return Err(RepositoryError::DuplicateKey { id });
        }

        let record = EmployeeRecord::new(RecordId::new(Uuid::new_v4().to_string()), employee);
        employees.insert(id, record.clone());
        Ok(record)
    }

    fn replace_by_id(
        &self,
        old_id: EmployeeId,
        employee: Employee,
    ) -> Result<EmployeeRecord, RepositoryError> {
        let mut employees = self.write()?;
        let new_id = employee.id();

        if !employees.contains_key(&old_id) {
            return Err(RepositoryError::NotFound { id: old_id });
        }
        if new_id != old_id && employees.contains_key(&new_id) {
            return Err(RepositoryError::DuplicateKey { id: new_id });
        }

        let existing = employees
            .remove(&old_id)
            .ok_or(RepositoryError::NotFound { id: old_id })?;
        let record = existing.with_employee(employee);
        employees.insert(new_id, record.clone());
        Ok(record)
    }

    fn delete_by_id(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        Ok(self.write()?.remove(&id).is_some())
    }

    fn delete_all(&self) -> Result<usize, RepositoryError> {
        let mut employees = self.write()?;
        let removed = employees.len();
        employees.clear();
        Ok(removed)
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdb_domain::Department;

    fn employee(id: i64, name: &str) -> Employee {
        Employee::from_parts(EmployeeId::new(id), name, 40, Department::Operations)
    }

    #[test]
    fn test_insert_and_find() {
        let repo = InMemoryEmployeeRepository::new();

        let record = repo.insert(employee(1, "Alice Smith")).unwrap();
        assert!(!record.record_id().as_str().is_empty());

        let found = repo.find_by_id(EmployeeId::new(1)).unwrap().unwrap();
        assert_eq!(found, record);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let repo = InMemoryEmployeeRepository::new();
        repo.insert(employee(1, "Alice Smith")).unwrap();

        let err = repo.insert(employee(1, "Bob Stone")).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::DuplicateKey {
                id: EmployeeId::new(1)
            }
        );
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_list_is_ordered() {
        let repo = InMemoryEmployeeRepository::new();
        repo.insert(employee(9, "Carol King")).unwrap();
        repo.insert(employee(3, "Alice Smith")).unwrap();
        repo.insert(employee(5, "Bob Stone")).unwrap();

        let ids: Vec<i64> = repo
            .find_all_ordered_by_id_ascending()
            .unwrap()
            .iter()
            .map(|r| r.id().value())
            .collect();
        assert_eq!(ids, vec![3, 5, 9]);
    }

    #[test]
    fn test_replace_moves_key_and_keeps_record_id() {
        let repo = InMemoryEmployeeRepository::new();
        let original = repo.insert(employee(1, "Alice Smith")).unwrap();

        let replaced = repo
            .replace_by_id(EmployeeId::new(1), employee(2, "Alice Jones"))
            .unwrap();

        assert_eq!(replaced.record_id(), original.record_id());
        assert!(repo.find_by_id(EmployeeId::new(1)).unwrap().is_none());
        assert_eq!(
            repo.find_by_id(EmployeeId::new(2))
                .unwrap()
                .unwrap()
                .employee()
                .full_name(),
            "Alice Jones"
        );
    }

    #[test]
    fn test_replace_conflict_leaves_both_records() {
        let repo = InMemoryEmployeeRepository::new();
        repo.insert(employee(1, "Alice Smith")).unwrap();
        repo.insert(employee(2, "Bob Stone")).unwrap();

        let err = repo
            .replace_by_id(EmployeeId::new(1), employee(2, "Alice Smith"))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateKey { .. }));
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_replace_missing() {
        let repo = InMemoryEmployeeRepository::new();
        let err = repo
            .replace_by_id(EmployeeId::new(1), employee(1, "Alice Smith"))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[test]
    fn test_delete() {
        let repo = InMemoryEmployeeRepository::new();
        repo.insert(employee(1, "Alice Smith")).unwrap();
        repo.insert(employee(2, "Bob Stone")).unwrap();

        assert!(repo.delete_by_id(EmployeeId::new(1)).unwrap());
        assert!(!repo.delete_by_id(EmployeeId::new(1)).unwrap());
        assert_eq!(repo.delete_all().unwrap(), 1);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_clones_share_storage() {
        let repo = InMemoryEmployeeRepository::new();
        let other = repo.clone();

        repo.insert(employee(1, "Alice Smith")).unwrap();
        assert!(other.exists(EmployeeId::new(1)).unwrap());
    }
}
