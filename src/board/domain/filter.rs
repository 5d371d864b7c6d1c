//! Display-only filter projection over the board.

use super::{Board, Task};
use chrono::NaiveDate;

/// Selects which tasks the presentation layer shows.
///
/// A filter only affects the read projection; the stored board contents
/// are never altered by filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every task, no filtering.
    #[default]
    All,
    /// Tasks whose completion flag is set.
    Completed,
    /// Tasks whose completion flag is not set.
    Pending,
    /// Tasks due strictly before today and not completed.
    Overdue,
}

impl Filter {
    /// Returns whether the task passes this filter on the given day.
    #[must_use]
    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed(),
            Self::Pending => !task.completed(),
            Self::Overdue => task.is_overdue(today),
        }
    }
}

/// Produces the filtered display projection: all tasks concatenated in
/// column order (todo, doing, done), retaining those that pass `filter`.
///
/// Each call builds a fresh sequence; callers must not assume identity
/// with the stored lists.
#[must_use]
pub fn filtered_tasks(board: &Board, filter: Filter, today: NaiveDate) -> Vec<Task> {
    board
        .iter()
        .filter(|task| filter.matches(task, today))
        .cloned()
        .collect()
}
