//! Domain model for the task board.
//!
//! The board domain models the three-column task collection, validated
//! scalars, status transitions, the transient edit session, and the
//! display filter while keeping all infrastructure concerns outside of
//! the domain boundary.

mod board;
mod edit;
mod error;
mod filter;
mod ids;
mod task;

pub use board::Board;
pub use edit::{EditSession, TaskDraft};
pub use error::{BoardDomainError, ParseStatusError};
pub use filter::{Filter, filtered_tasks};
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Status, Task};
