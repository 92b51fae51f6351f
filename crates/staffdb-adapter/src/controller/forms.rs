//! Form and query payloads accepted by the HTTP controller
//!
//! Every field is taken as text and parsed here, so a missing or non-numeric
//! value becomes a `ValidationError` rendered on the error page rather than
//! an extractor rejection.

use serde::Deserialize;
use staffdb_domain::{parse_whole_number, EmployeeDraft, ValidationError};

/// `GET /employees?employee_id=N`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub employee_id: Option<String>,
}

impl SearchQuery {
    /// The id filter; absent or blank means `0` (no filter)
    pub fn employee_id(&self) -> Result<i64, ValidationError> {
        match self.employee_id.as_deref().map(str::trim) {
            None | Some("") => Ok(0),
            Some(raw) => parse_whole_number("Employee ID", raw),
        }
    }
}

/// `POST /add`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddEmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub age: String,
    pub department: String,
}

impl AddEmployeeForm {
    pub fn into_draft(self) -> Result<EmployeeDraft, ValidationError> {
        Ok(EmployeeDraft::new(
            parse_whole_number("Employee ID", &self.employee_id)?,
            self.full_name,
            parse_whole_number("Age", &self.age)?,
            self.department,
        ))
    }
}

/// `POST /update`: `employee_id` names the current record, `new_id` its new key
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateEmployeeForm {
    pub employee_id: String,
    pub new_id: String,
    pub full_name: String,
    pub age: String,
    pub department: String,
}

impl UpdateEmployeeForm {
    /// Returns the current id and the replacement draft
    pub fn into_parts(self) -> Result<(i64, EmployeeDraft), ValidationError> {
        let old_id = parse_whole_number("Employee ID", &self.employee_id)?;
        let draft = EmployeeDraft::new(
            parse_whole_number("New ID", &self.new_id)?,
            self.full_name,
            parse_whole_number("Age", &self.age)?,
            self.department,
        );
        Ok((old_id, draft))
    }
}

/// `POST /delete`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteEmployeeForm {
    pub employee_id: String,
}

impl DeleteEmployeeForm {
    pub fn employee_id(&self) -> Result<i64, ValidationError> {
        parse_whole_number("Employee ID", &self.employee_id)
    }
}
