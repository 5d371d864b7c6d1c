//! Board aggregate: three ordered task lists and their transitions.

use super::{BoardDomainError, Status, Task};

/// The three-column task collection.
///
/// Order within a list is insertion order; the only ordering operations
/// are append (creation or move) and removal (delete or move). Every
/// list-changing operation restores each moved task's denormalised status
/// field to the list it lands in, so the field can never disagree with
/// membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    todo: Vec<Task>,
    doing: Vec<Task>,
    done: Vec<Task>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todo: Vec::new(),
            doing: Vec::new(),
            done: Vec::new(),
        }
    }

    /// Builds a board from already-materialised lists, restoring the
    /// status invariant on every task.
    #[must_use]
    pub fn from_lists(todo: Vec<Task>, doing: Vec<Task>, done: Vec<Task>) -> Self {
        let mut board = Self { todo, doing, done };
        for status in [Status::Todo, Status::Doing, Status::Done] {
            for task in board.list_mut(status) {
                task.set_status(status);
            }
        }
        board
    }

    /// Returns the tasks in the given column.
    #[must_use]
    pub fn list(&self, status: Status) -> &[Task] {
        match status {
            Status::Todo => &self.todo,
            Status::Doing => &self.doing,
            Status::Done => &self.done,
        }
    }

    fn list_mut(&mut self, status: Status) -> &mut Vec<Task> {
        match status {
            Status::Todo => &mut self.todo,
            Status::Doing => &mut self.doing,
            Status::Done => &mut self.done,
        }
    }

    /// Returns the task at the given position, if it exists.
    #[must_use]
    pub fn task_at(&self, status: Status, index: usize) -> Option<&Task> {
        self.list(status).get(index)
    }

    /// Returns the total number of tasks across all three columns.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.todo.len() + self.doing.len() + self.done.len()
    }

    /// Returns whether the board holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Iterates over all tasks in column order: todo, doing, done.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.todo.iter().chain(self.doing.iter()).chain(self.done.iter())
    }

    /// Appends a task to the given column, restoring its status field.
    pub fn push(&mut self, status: Status, mut task: Task) {
        task.set_status(status);
        self.list_mut(status).push(task);
    }

    /// Removes and returns the task at the given position.
    ///
    /// Positions shift after prior removals; callers must use the index
    /// valid at the moment of the call.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PositionOutOfRange`] when the index is
    /// not a valid position in the addressed list.
    pub fn remove(&mut self, status: Status, index: usize) -> Result<Task, BoardDomainError> {
        let list = self.list_mut(status);
        if index >= list.len() {
            return Err(BoardDomainError::PositionOutOfRange {
                status,
                index,
                len: list.len(),
            });
        }
        Ok(list.remove(index))
    }

    /// Moves the task at `index` from one column to the end of another.
    ///
    /// Title, description, due date, and the completion flag are preserved
    /// exactly; only the denormalised status field is restored to the
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PositionOutOfRange`] when the index is
    /// not a valid position in the source list.
    pub fn move_between(
        &mut self,
        from: Status,
        to: Status,
        index: usize,
    ) -> Result<(), BoardDomainError> {
        let task = self.remove(from, index)?;
        self.push(to, task);
        Ok(())
    }

    /// Removes the task at the given position, marks it completed, and
    /// appends it to the done column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PositionOutOfRange`] when the index is
    /// not a valid position in the addressed list.
    pub fn complete(&mut self, status: Status, index: usize) -> Result<(), BoardDomainError> {
        let mut task = self.remove(status, index)?;
        task.mark_completed();
        self.push(Status::Done, task);
        Ok(())
    }

    /// Returns a mutable handle on the task at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PositionOutOfRange`] when the index is
    /// not a valid position in the addressed list.
    pub fn task_at_mut(
        &mut self,
        status: Status,
        index: usize,
    ) -> Result<&mut Task, BoardDomainError> {
        let len = self.list(status).len();
        self.list_mut(status)
            .get_mut(index)
            .ok_or(BoardDomainError::PositionOutOfRange { status, index, len })
    }
}
