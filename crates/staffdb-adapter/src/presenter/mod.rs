//! Presenters - Turn directory data into HTML

pub mod views;

pub use views::{EmployeeView, PageRenderer, ViewError};
