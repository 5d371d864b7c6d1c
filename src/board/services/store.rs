//! Board service: in-memory state plus remote synchronisation.

use crate::board::domain::{
    Board, BoardDomainError, EditSession, Filter, Status, Task, TaskDraft, TaskTitle,
    filtered_tasks,
};
use crate::board::ports::RemoteBoardStore;
use mockable::Clock;
use std::sync::Arc;

/// Banner message shown while the initial load has failed.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching tasks";

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardDomainError>;

/// Outcome of the full-board push that follows a committed mutation.
///
/// A failed push never blocks the caller: local state stays authoritative
/// and the failure is logged. The outcome is surfaced so callers and tests
/// can observe the effect without a real network dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The remote copy now matches local state.
    Synced,
    /// The push failed; remote state is stale until the next successful
    /// push.
    Failed,
}

/// Owns the board for the lifetime of a session and orchestrates all
/// user-intent mutations.
///
/// Mutations take `&mut self`: all state changes happen on the single
/// logical UI thread, so in-memory consistency holds by construction.
/// Every committed mutation is followed by one unconditional full-board
/// write to the remote store (no diffing, no retry).
#[derive(Clone)]
pub struct BoardService<R, C>
where
    R: RemoteBoardStore,
    C: Clock + Send + Sync,
{
    remote: Arc<R>,
    clock: Arc<C>,
    board: Board,
    filter: Filter,
    edit: Option<EditSession>,
    load_error: Option<String>,
}

impl<R, C> BoardService<R, C>
where
    R: RemoteBoardStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty board and the default filter.
    #[must_use]
    pub fn new(remote: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            remote,
            clock,
            board: Board::new(),
            filter: Filter::default(),
            edit: None,
            load_error: None,
        }
    }

    /// Fetches the full board from the remote store.
    ///
    /// On failure the board is left at its default empty shape and a
    /// persistent banner message is set; there is no automatic retry. A
    /// later successful load clears the banner.
    pub async fn load_board(&mut self) {
        match self.remote.fetch().await {
            Ok(board) => {
                self.board = board;
                self.load_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch board from remote store");
                self.board = Board::new();
                self.load_error = Some(FETCH_ERROR_MESSAGE.to_owned());
            }
        }
    }

    /// Appends a new task built from the draft to the given column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EditSessionActive`] while an edit
    /// session exists, or [`BoardDomainError::EmptyTitle`] when the draft
    /// title is blank after trimming. Either way nothing is mutated and no
    /// sync is issued.
    pub async fn add_task(
        &mut self,
        status: Status,
        draft: &TaskDraft,
    ) -> BoardServiceResult<SyncOutcome> {
        if self.edit.is_some() {
            return Err(BoardDomainError::EditSessionActive);
        }
        let title = TaskTitle::new(draft.title.as_str())?;
        let task = Task::new(title, draft.description.as_str(), draft.due_date, status);
        self.board.push(status, task);
        Ok(self.sync().await)
    }

    /// Removes the task at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PositionOutOfRange`] when the position
    /// is invalid at call time.
    pub async fn remove_task(
        &mut self,
        status: Status,
        index: usize,
    ) -> BoardServiceResult<SyncOutcome> {
        self.board.remove(status, index)?;
        Ok(self.sync().await)
    }

    /// Moves the task at `index` from one column to the end of another.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PositionOutOfRange`] when the position
    /// is invalid at call time.
    pub async fn move_task(
        &mut self,
        from: Status,
        to: Status,
        index: usize,
    ) -> BoardServiceResult<SyncOutcome> {
        self.board.move_between(from, to, index)?;
        Ok(self.sync().await)
    }

    /// Marks the task at the given position completed and moves it to the
    /// done column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PositionOutOfRange`] when the position
    /// is invalid at call time.
    pub async fn mark_completed(
        &mut self,
        status: Status,
        index: usize,
    ) -> BoardServiceResult<SyncOutcome> {
        self.board.complete(status, index)?;
        Ok(self.sync().await)
    }

    /// Starts editing the task at the given position, prefilling the
    /// session draft from its current fields. Read-only; no sync.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PositionOutOfRange`] when no task
    /// exists at the position.
    pub fn start_editing(&mut self, status: Status, index: usize) -> BoardServiceResult<()> {
        let session = EditSession::capture(&self.board, status, index)?;
        self.edit = Some(session);
        Ok(())
    }

    /// Replaces the active session's working field copies.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NoActiveEditSession`] when no edit
    /// session is active.
    pub fn update_draft(&mut self, draft: TaskDraft) -> BoardServiceResult<()> {
        self.edit
            .as_mut()
            .ok_or(BoardDomainError::NoActiveEditSession)?
            .set_draft(draft);
        Ok(())
    }

    /// Applies the session draft to the target task and ends the session.
    ///
    /// Status and the completion flag are preserved. When the recorded
    /// target no longer refers to the captured task the session is
    /// discarded and [`BoardDomainError::InvalidEditTarget`] is returned;
    /// when the draft title is blank the session stays active so the
    /// caller can correct the form.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NoActiveEditSession`],
    /// [`BoardDomainError::InvalidEditTarget`], or
    /// [`BoardDomainError::EmptyTitle`].
    pub async fn save_edited_task(&mut self) -> BoardServiceResult<SyncOutcome> {
        let Some(session) = self.edit.clone() else {
            return Err(BoardDomainError::NoActiveEditSession);
        };
        if let Err(err) = session.verify_target(&self.board) {
            self.edit = None;
            return Err(err);
        }
        let title = TaskTitle::new(session.draft().title.as_str())?;
        self.board
            .task_at_mut(session.status(), session.index())?
            .replace_fields(
                title,
                session.draft().description.as_str(),
                session.draft().due_date,
            );
        self.edit = None;
        Ok(self.sync().await)
    }

    /// Discards the active edit session, if any, without mutating the
    /// board. No sync.
    pub fn cancel_editing(&mut self) {
        self.edit = None;
    }

    /// Selects the display filter. Pure state change; no sync.
    pub const fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Returns the filtered display projection: all tasks in column order
    /// (todo, doing, done) that pass the current filter. Each call builds
    /// a fresh sequence.
    #[must_use]
    pub fn filtered_tasks(&self) -> Vec<Task> {
        let today = self.clock.utc().date_naive();
        filtered_tasks(&self.board, self.filter, today)
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current display filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Returns the active edit session, if any.
    #[must_use]
    pub const fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Returns the persistent load-failure banner, if the last load
    /// failed.
    #[must_use]
    pub fn fetch_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    async fn sync(&self) -> SyncOutcome {
        match self.remote.replace(&self.board).await {
            Ok(()) => SyncOutcome::Synced,
            Err(err) => {
                // Local state stays authoritative; the user is not blocked.
                tracing::warn!(error = %err, "failed to push board to remote store");
                SyncOutcome::Failed
            }
        }
    }
}
