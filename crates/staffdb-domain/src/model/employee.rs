//! Employee - The one entity the directory manages
//!
//! Employee is an Entity keyed by its business key, the [`EmployeeId`].
//! The storage layer additionally stamps every stored employee with an
//! opaque [`RecordId`]; the two are deliberately distinct types.

use super::department::Department;

/// Business key of an employee
///
/// Lookups accept any integer (the delete form uses `0` as a sentinel and a
/// search for a negative id simply finds nothing). Only validated employees
/// are guaranteed to carry a positive id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage-assigned identifier of a persisted employee
///
/// Opaque to the domain: adapters decide the format, views only print it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated employee
///
/// Built by [`EmployeeDraft::validate`](super::validation::EmployeeDraft::validate)
/// for user input, or by [`Employee::from_parts`] when rehydrating data the
/// store already accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    full_name: String,
    age: u8,
    department: Department,
}

impl Employee {
    /// Assemble an employee from trusted parts (no rule checks)
    pub fn from_parts(
        id: EmployeeId,
        full_name: impl Into<String>,
        age: u8,
        department: Department,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            age,
            department,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn department(&self) -> Department {
        self.department
    }
}

/// An employee as held by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    record_id: RecordId,
    employee: Employee,
}

impl EmployeeRecord {
    pub fn new(record_id: RecordId, employee: Employee) -> Self {
        Self {
            record_id,
            employee,
        }
    }

    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn id(&self) -> EmployeeId {
        self.employee.id()
    }

    /// Same record, new contents. Used by in-place updates.
    pub fn with_employee(self, employee: Employee) -> Self {
        Self {
            record_id: self.record_id,
            employee,
        }
    }

    pub fn into_employee(self) -> Employee {
        self.employee
    }
}
