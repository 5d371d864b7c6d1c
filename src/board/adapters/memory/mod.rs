//! In-memory adapter for tests and local experimentation.

mod store;

pub use store::InMemoryBoardStore;
