//! SQLite Repository Implementation
//!
//! # Responsibility
//! - Open file or in-memory SQLite databases and create the `employees` table.
//! - Implement the employee port with one SQL statement (or one transaction)
//!   per operation.
//!
//! # Invariants
//! - `employees.employee_id` carries a UNIQUE index; duplicate ids are rejected
//!   by SQLite itself and surface as `RepositoryError::DuplicateKey`.
//! - Read paths reject rows that no longer satisfy the domain types instead of
//!   masking them.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use staffdb_domain::{
    Department, Employee, EmployeeId, EmployeeRecord, EmployeeRepository, RecordId,
    RepositoryError,
};
use tracing::{error, info};
use uuid::Uuid;

const SCHEMA_SQL: &str = include_str!("schema.sql");

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    record_id,
    employee_id,
    full_name,
    age,
    department
FROM employees";

/// SQLite-backed employee repository
///
/// The connection sits behind a mutex; clones share it.
#[derive(Debug, Clone)]
pub struct SqliteEmployeeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteEmployeeRepository {
    /// Open (or create) a database file and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!(path = %path.display(), "opening sqlite store");

        let conn = Connection::open(path).map_err(|err| {
            error!(path = %path.display(), error = %err, "failed to open sqlite store");
            persistence(err)
        })?;
        let repo = Self::bootstrap(conn)?;

        info!(
            path = %path.display(),
            duration_ms = started_at.elapsed().as_millis() as u64,
            "sqlite store ready"
        );
        Ok(repo)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory().map_err(persistence)?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> Result<Self, RepositoryError> {
        conn.busy_timeout(Duration::from_secs(5))
            .map_err(persistence)?;
        conn.execute_batch(SCHEMA_SQL).map_err(persistence)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn
            .lock()
            .map_err(|_| RepositoryError::PersistenceError {
                message: "Failed to acquire connection lock".to_string(),
            })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn find_by_id(&self, id: EmployeeId) -> Result<Option<EmployeeRecord>, RepositoryError> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                &format!("{EMPLOYEE_SELECT_SQL} WHERE employee_id = ?1;"),
                params![id.value()],
                EmployeeRow::read,
            )
            .optional()
            .map_err(persistence)?;

        row.map(EmployeeRow::into_record).transpose()
    }

    fn find_all_ordered_by_id_ascending(&self) -> Result<Vec<EmployeeRecord>, RepositoryError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY employee_id ASC;"))
            .map_err(persistence)?;
        let rows = stmt
            .query_map([], EmployeeRow::read)
            .map_err(persistence)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(persistence)?.into_record()?);
        }
        Ok(records)
    }

    fn insert(&self, employee: Employee) -> Result<EmployeeRecord, RepositoryError> {
        let id = employee.id();
        let record_id = RecordId::new(Uuid::new_v4().to_string());

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO employees (
                record_id,
                employee_id,
                full_name,
                age,
                department
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                record_id.as_str(),
                id.value(),
                employee.full_name(),
                i64::from(employee.age()),
                employee.department().display_name(),
            ],
        )
        .map_err(|err| write_error(err, id))?;

        Ok(EmployeeRecord::new(record_id, employee))
    }

    fn replace_by_id(
        &self,
        old_id: EmployeeId,
        employee: Employee,
    ) -> Result<EmployeeRecord, RepositoryError> {
        let new_id = employee.id();

        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(persistence)?;

        let record_id: Option<String> = tx
            .query_row(
                "SELECT record_id FROM employees WHERE employee_id = ?1;",
                params![old_id.value()],
                |row| row.get(0),
            )
            .optional()
            .map_err(persistence)?;
        let Some(record_id) = record_id else {
            return Err(RepositoryError::NotFound { id: old_id });
        };

        tx.execute(
            "UPDATE employees
             SET
                employee_id = ?1,
                full_name = ?2,
                age = ?3,
                department = ?4
             WHERE record_id = ?5;",
            params![
                new_id.value(),
                employee.full_name(),
                i64::from(employee.age()),
                employee.department().display_name(),
                record_id,
            ],
        )
        .map_err(|err| write_error(err, new_id))?;
        tx.commit().map_err(persistence)?;

        Ok(EmployeeRecord::new(RecordId::new(record_id), employee))
    }

    fn delete_by_id(&self, id: EmployeeId) -> Result<bool, RepositoryError> {
        let conn = self.lock()?;
        let changed = conn
            .execute(
                "DELETE FROM employees WHERE employee_id = ?1;",
                params![id.value()],
            )
            .map_err(persistence)?;
        Ok(changed > 0)
    }

    fn delete_all(&self) -> Result<usize, RepositoryError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM employees;", [])
            .map_err(persistence)
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM employees;", [], |row| row.get(0))
            .map_err(persistence)?;
        usize::try_from(count).map_err(|_| invalid_data(format!("negative row count {count}")))
    }
}

/// Raw column values, converted to domain types outside the rusqlite callback
struct EmployeeRow {
    record_id: String,
    employee_id: i64,
    full_name: String,
    age: i64,
    department: String,
}

impl EmployeeRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            record_id: row.get("record_id")?,
            employee_id: row.get("employee_id")?,
            full_name: row.get("full_name")?,
            age: row.get("age")?,
            department: row.get("department")?,
        })
    }

    fn into_record(self) -> Result<EmployeeRecord, RepositoryError> {
        let age = u8::try_from(self.age).map_err(|_| {
            invalid_data(format!("invalid age `{}` in employees.age", self.age))
        })?;
        let department = Department::parse(&self.department).ok_or_else(|| {
            invalid_data(format!(
                "invalid department `{}` in employees.department",
                self.department
            ))
        })?;

        let employee = Employee::from_parts(
            EmployeeId::new(self.employee_id),
            self.full_name,
            age,
            department,
        );
        Ok(EmployeeRecord::new(RecordId::new(self.record_id), employee))
    }
}

fn persistence(err: rusqlite::Error) -> RepositoryError {
    RepositoryError::PersistenceError {
        message: err.to_string(),
    }
}

fn invalid_data(message: String) -> RepositoryError {
    RepositoryError::PersistenceError {
        message: format!("invalid persisted employee data: {message}"),
    }
}

/// Writes only have one uniqueness constraint a caller can trip: employee_id
fn write_error(err: rusqlite::Error, id: EmployeeId) -> RepositoryError {
    match err.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => RepositoryError::DuplicateKey { id },
        _ => persistence(err),
    }
}
