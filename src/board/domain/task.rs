//! Task record and board column status.

use super::{ParseStatusError, TaskId, TaskTitle};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a task belongs to.
///
/// List membership is the authoritative status; the field denormalised onto
/// each task is restored to the containing list by every list-changing
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Work has not started.
    Todo,
    /// Work is in progress.
    Doing,
    /// Work has finished.
    Done,
}

impl Status {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    due_date: Option<NaiveDate>,
    status: Status,
    completed: bool,
}

/// Parameter object for reconstructing a task fetched from the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, possibly empty.
    pub description: String,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted column status.
    pub status: Status,
    /// Persisted completion flag.
    pub completed: bool,
}

impl Task {
    /// Creates a new, not-yet-completed task destined for the given column.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
        status: Status,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description: description.into(),
            due_date,
            status,
            completed: false,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            completed: data.completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if one is set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the column status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns whether the task has been marked completed.
    ///
    /// The flag is sticky: it is set when a task reaches the done column
    /// and no operation clears it, even if the task is later moved back.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the task's due date lies strictly before `today`
    /// and it has not been completed. A task without a due date is never
    /// overdue.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due < today) && !self.completed
    }

    /// Replaces the user-editable fields, leaving status and completion
    /// untouched.
    pub fn replace_fields(
        &mut self,
        title: TaskTitle,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) {
        self.title = title;
        self.description = description.into();
        self.due_date = due_date;
    }

    /// Restores the denormalised status field to the containing list.
    pub(crate) const fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Marks the task completed. The flag is never cleared.
    pub(crate) const fn mark_completed(&mut self) {
        self.completed = true;
    }
}
