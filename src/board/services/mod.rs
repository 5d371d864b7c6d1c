//! Orchestration services for the task board.

mod store;

pub use store::{BoardService, BoardServiceResult, FETCH_ERROR_MESSAGE, SyncOutcome};
