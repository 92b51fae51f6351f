//! Inbound adapters - HTTP form endpoints

pub mod forms;
pub mod http;

pub use http::{router, serve, AppState, LIST_PATH};
