//! Domain Models - The vocabulary of the staff directory
//!
//! These types represent the "Ubiquitous Language" of the directory.
//! Every name here should match how we talk about the system.

pub mod department;
pub mod employee;
pub mod validation;
