//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from staffdb-domain.

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryEmployeeRepository;
pub use sqlite::SqliteEmployeeRepository;
