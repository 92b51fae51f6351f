//! # Staff Directory Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//! one [`EmployeeService`] method per route, each stateless.

pub mod employee_service;
pub mod error;

pub use staffdb_domain;

pub use employee_service::{DeleteOutcome, EmployeeService, CLEAR_ALL_SENTINEL};
pub use error::{NotFound, StaffError, StaffResult};
