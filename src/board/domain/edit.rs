//! Transient edit session and task form draft.

use super::{Board, BoardDomainError, Status, TaskId};
use chrono::NaiveDate;

/// Working copies of the user-editable task fields.
///
/// The title is carried as raw text and validated when the draft is
/// applied, so a form can hold an in-progress (possibly blank) value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title text, validated on apply.
    pub title: String,
    /// Description text, may be empty.
    pub description: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft with the given title and empty remaining fields.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// At most one edit session exists at a time.
///
/// The session records its target both by position and by task identifier;
/// the identifier detects the case where the position has been reused by a
/// different task since editing began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    status: Status,
    index: usize,
    task_id: TaskId,
    draft: TaskDraft,
}

impl EditSession {
    /// Captures the task at `(status, index)` into a new session, with the
    /// draft prefilled from its current field values.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PositionOutOfRange`] when no task exists
    /// at the given position.
    pub fn capture(board: &Board, status: Status, index: usize) -> Result<Self, BoardDomainError> {
        let task = board
            .task_at(status, index)
            .ok_or(BoardDomainError::PositionOutOfRange {
                status,
                index,
                len: board.list(status).len(),
            })?;
        Ok(Self {
            status,
            index,
            task_id: task.id(),
            draft: TaskDraft {
                title: task.title().as_str().to_owned(),
                description: task.description().to_owned(),
                due_date: task.due_date(),
            },
        })
    }

    /// Returns the column of the edit target.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the recorded position of the edit target.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the identifier of the task captured at session start.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the working field copies.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Replaces the working field copies.
    pub fn set_draft(&mut self, draft: TaskDraft) {
        self.draft = draft;
    }

    /// Verifies that the recorded target still refers to the captured task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidEditTarget`] when the position no
    /// longer exists or holds a different task.
    pub fn verify_target(&self, board: &Board) -> Result<(), BoardDomainError> {
        match board.task_at(self.status, self.index) {
            Some(task) if task.id() == self.task_id => Ok(()),
            _ => Err(BoardDomainError::InvalidEditTarget),
        }
    }
}
