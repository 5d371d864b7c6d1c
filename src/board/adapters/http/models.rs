//! Wire models for the remote task store contract.
//!
//! The remote contract predates this crate: lists are optional on fetch,
//! `dueDate` travels as a string (`YYYY-MM-DD` or empty), and records may
//! lack an `id`. Decoding normalises all of that into the domain model.

use crate::board::domain::{
    Board, BoardDomainError, PersistedTaskData, Status, Task, TaskId, TaskTitle,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full-board payload exchanged with the remote store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardPayload {
    /// Todo column records; absent on the wire means empty.
    #[serde(default)]
    pub todo: Vec<TaskRecord>,
    /// Doing column records; absent on the wire means empty.
    #[serde(default)]
    pub doing: Vec<TaskRecord>,
    /// Done column records; absent on the wire means empty.
    #[serde(default)]
    pub done: Vec<TaskRecord>,
}

/// One task record on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier; records written before identifiers existed may
    /// omit it, in which case a fresh one is assigned on decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Title text.
    pub title: String,
    /// Description text.
    #[serde(default)]
    pub description: String,
    /// Due date as `YYYY-MM-DD`, or the empty string for none.
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    /// Denormalised column status. Ignored on decode; membership in one
    /// of the three lists is authoritative.
    #[serde(default)]
    pub status: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl BoardPayload {
    /// Encodes a board snapshot for a full-board write.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let column = |status| -> Vec<TaskRecord> {
            board
                .list(status)
                .iter()
                .map(TaskRecord::from_task)
                .collect()
        };
        Self {
            todo: column(Status::Todo),
            doing: column(Status::Doing),
            done: column(Status::Done),
        }
    }

    /// Decodes the payload into a domain board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when any record carries a
    /// blank title; the crate's own operations can never produce one.
    pub fn into_board(self) -> Result<Board, BoardDomainError> {
        let decode = |records: Vec<TaskRecord>, status| -> Result<Vec<Task>, BoardDomainError> {
            records
                .into_iter()
                .map(|record| record.into_task(status))
                .collect()
        };
        let todo = decode(self.todo, Status::Todo)?;
        let doing = decode(self.doing, Status::Doing)?;
        let done = decode(self.done, Status::Done)?;
        Ok(Board::from_lists(todo, doing, done))
    }
}

impl TaskRecord {
    /// Encodes a domain task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id().into_inner()),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            due_date: task.due_date().map(|date| date.to_string()).unwrap_or_default(),
            status: task.status().as_str().to_owned(),
            completed: task.completed(),
        }
    }

    /// Decodes the record into a task belonging to the given column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn into_task(self, status: Status) -> Result<Task, BoardDomainError> {
        Ok(Task::from_persisted(PersistedTaskData {
            id: self.id.map_or_else(TaskId::new, TaskId::from_uuid),
            title: TaskTitle::new(self.title)?,
            description: self.description,
            due_date: parse_due_date(&self.due_date),
            status,
            completed: self.completed,
        }))
    }
}

/// Parses a wire due date. Empty and unparseable values both decode to
/// `None`, which the filter treats as "never overdue".
fn parse_due_date(value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
