//! Validation - Business rules an employee must satisfy before it is stored
//!
//! Rules run in a fixed order and stop at the first failure:
//! id positivity, age range, name length, name charset, name repetition,
//! department membership.

use super::department::Department;
use super::employee::{Employee, EmployeeId};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;
pub const MIN_NAME_LEN: usize = 5;
pub const MAX_NAME_LEN: usize = 100;

/// Why a candidate employee was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Employee id is zero or negative
    NonPositiveId { value: i64 },
    /// Age outside the working age range
    AgeOutOfRange { value: i64 },
    /// Name shorter or longer than allowed (in characters)
    NameLength { length: usize },
    /// Name contains something other than letters and spaces
    NameCharset,
    /// Name is one character repeated
    NameRepeated,
    /// Department is not one of the fixed labels
    UnknownDepartment { value: String },
    /// A numeric form field could not be read as an integer
    MalformedNumber { field: &'static str, value: String },
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::NonPositiveId { .. } => {
                write!(f, "Employee ID must be greater than 0")
            }
            ValidationError::AgeOutOfRange { .. } => {
                write!(f, "Age must be within working age range")
            }
            ValidationError::NameLength { .. } => {
                write!(f, "Length of name invalid, please enter full name")
            }
            ValidationError::NameCharset => write!(f, "Name must contain only letters"),
            ValidationError::NameRepeated => {
                write!(f, "Repeating and duplicate values detected")
            }
            ValidationError::UnknownDepartment { .. } => {
                write!(f, "Invalid Department, choose from [{}]", Department::choices())
            }
            ValidationError::MalformedNumber { field, .. } => {
                write!(f, "{} must be a whole number", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Unvalidated employee as submitted by a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: i64,
    pub full_name: String,
    pub age: i64,
    pub department: String,
}

impl EmployeeDraft {
    pub fn new(
        employee_id: i64,
        full_name: impl Into<String>,
        age: i64,
        department: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            full_name: full_name.into(),
            age,
            department: department.into(),
        }
    }

    /// Check every rule and produce the normalized employee
    pub fn validate(self) -> Result<Employee, ValidationError> {
        let id = validate_employee_id(self.employee_id)?;
        let age = validate_age(self.age)?;
        validate_full_name(&self.full_name)?;
        let department = validate_department(&self.department)?;

        Ok(Employee::from_parts(id, self.full_name, age, department))
    }
}

pub fn validate_employee_id(value: i64) -> Result<EmployeeId, ValidationError> {
    if value < 1 {
        return Err(ValidationError::NonPositiveId { value });
    }
    Ok(EmployeeId::new(value))
}

pub fn validate_age(value: i64) -> Result<u8, ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&value) {
        return Err(ValidationError::AgeOutOfRange { value });
    }
    u8::try_from(value).map_err(|_| ValidationError::AgeOutOfRange { value })
}

/// Name must be 5-100 characters of letters and spaces, not one repeated character
pub fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&length) {
        return Err(ValidationError::NameLength { length });
    }

    let mut letters = name.chars().filter(|c| *c != ' ').peekable();
    if letters.peek().is_none() || !letters.all(char::is_alphabetic) {
        return Err(ValidationError::NameCharset);
    }

    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return Err(ValidationError::NameRepeated);
        }
    }

    Ok(())
}

pub fn validate_department(value: &str) -> Result<Department, ValidationError> {
    Department::parse(value).ok_or_else(|| ValidationError::UnknownDepartment {
        value: value.to_string(),
    })
}

/// Read a numeric form field, reporting the field label on failure
///
/// Surrounding whitespace is ignored; an empty value is malformed.
pub fn parse_whole_number(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::MalformedNumber {
            field,
            value: raw.to_string(),
        })
}
