//! EmployeeService - Validation and persistence orchestration
//!
//! Each method maps to one form route. The service keeps no state of its own;
//! the repository is the single owner of durable data.

use std::sync::Arc;

use staffdb_domain::{Employee, EmployeeDraft, EmployeeId, EmployeeRecord, EmployeeRepository};
use tracing::{debug, info, warn};

use crate::error::{NotFound, StaffError, StaffResult};

/// Id that means "everyone" on delete, and "no filter" on search
pub const CLEAR_ALL_SENTINEL: i64 = 0;

/// What a delete request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// One employee removed
    Removed(EmployeeId),
    /// Sentinel id given: the whole directory was cleared
    Cleared(usize),
}

/// Directory operations over any [`EmployeeRepository`]
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// List view: one employee when filtered, everyone otherwise
    ///
    /// A filter of [`CLEAR_ALL_SENTINEL`] means no filter. Both branches treat
    /// an empty result as an error so the caller shows a message instead of an
    /// empty table.
    pub fn search(&self, employee_id: i64) -> StaffResult<Vec<EmployeeRecord>> {
        if employee_id != CLEAR_ALL_SENTINEL {
            let id = EmployeeId::new(employee_id);
            return match self.repository.find_by_id(id)? {
                Some(record) => Ok(vec![record]),
                None => Err(NotFound::NoMatches { id }.into()),
            };
        }

        let records = self.repository.find_all_ordered_by_id_ascending()?;
        if records.is_empty() {
            return Err(NotFound::EmptyDirectory.into());
        }
        Ok(records)
    }

    /// Homepage listing, empty directory allowed
    pub fn directory(&self) -> StaffResult<Vec<EmployeeRecord>> {
        Ok(self.repository.find_all_ordered_by_id_ascending()?)
    }

    /// Validate and store a new employee
    pub fn add(&self, draft: EmployeeDraft) -> StaffResult<EmployeeRecord> {
        let employee = draft.validate()?;
        let id = employee.id();

        if self.repository.exists(id)? {
            debug!(employee_id = %id, "add rejected, id already taken");
            return Err(StaffError::Conflict { id });
        }

        // The store re-checks uniqueness; a racing insert surfaces as Conflict
        let record = self.repository.insert(employee)?;
        info!(employee_id = %id, record_id = %record.record_id(), "employee added");
        Ok(record)
    }

    /// Replace the employee stored under `old_id`, possibly moving it to a new id
    pub fn update(&self, old_id: i64, draft: EmployeeDraft) -> StaffResult<EmployeeRecord> {
        let old_id = EmployeeId::new(old_id);
        if !self.repository.exists(old_id)? {
            return Err(NotFound::Employee { id: old_id }.into());
        }

        let employee: Employee = draft.validate()?;
        let new_id = employee.id();

        if new_id != old_id && self.repository.exists(new_id)? {
            debug!(old_id = %old_id, new_id = %new_id, "update rejected, id already taken");
            return Err(StaffError::Conflict { id: new_id });
        }

        let record = self.repository.replace_by_id(old_id, employee)?;
        info!(old_id = %old_id, new_id = %new_id, "employee updated");
        Ok(record)
    }

    /// Delete one employee, or everyone when given the sentinel id
    pub fn delete(&self, employee_id: i64) -> StaffResult<DeleteOutcome> {
        let id = EmployeeId::new(employee_id);

        if self.repository.delete_by_id(id)? {
            info!(employee_id = %id, "employee deleted");
            return Ok(DeleteOutcome::Removed(id));
        }

        if employee_id == CLEAR_ALL_SENTINEL {
            let removed = self.repository.delete_all()?;
            warn!(removed, "directory cleared via sentinel id");
            return Ok(DeleteOutcome::Cleared(removed));
        }

        Err(NotFound::Employee { id }.into())
    }
}
