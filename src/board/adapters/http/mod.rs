//! HTTP adapter for the remote task store.

mod models;
mod store;

pub use models::{BoardPayload, TaskRecord};
pub use store::{DEFAULT_BASE_URL, HttpBoardStore};
