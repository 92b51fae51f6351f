//! # Staff Directory Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (axum HTTP form routes)
//! - `presenter/` - HTML rendering (tera templates)
//! - `repository/` - Persistence implementations (in-memory, SQLite)

pub mod controller;
pub mod presenter;
pub mod repository;
