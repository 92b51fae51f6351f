//! # Staff Directory Domain Layer
//!
//! Pure business logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - Employee, Department, validation rules       ││
//! │  │  repository/ - Trait definitions (not implementations)      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! If we switch from SQLite to another store, this crate doesn't change.
//! If the forms move from HTML to JSON, this crate doesn't change.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    department::Department,
    employee::{Employee, EmployeeId, EmployeeRecord, RecordId},
    validation::{parse_whole_number, EmployeeDraft, ValidationError},
};

pub use repository::employee_repository::{EmployeeRepository, RepositoryError};
