//! In-memory remote store for board service tests.

use crate::board::domain::Board;
use crate::board::ports::{RemoteBoardStore, RemoteStoreError, RemoteStoreResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory stand-in for the remote task store.
///
/// Besides holding a board, it records every replace call so tests can
/// assert which mutations produced a sync effect, and supports failure
/// injection for both operations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    board: Board,
    replaced: Vec<Board>,
    replace_attempts: usize,
    fail_fetch: bool,
    fail_replace: bool,
}

impl InMemoryBoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with the given board.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.board = board;
        }
        store
    }

    /// Makes subsequent fetches fail.
    pub fn fail_fetch(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_fetch = fail;
        }
    }

    /// Makes subsequent replaces fail (the attempt is still counted).
    pub fn fail_replace(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_replace = fail;
        }
    }

    /// Returns the number of replace calls attempted, successful or not.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Transport`] when the internal lock is
    /// poisoned.
    pub fn replace_attempts(&self) -> RemoteStoreResult<usize> {
        let state = read_state(&self.state)?;
        Ok(state.replace_attempts)
    }

    /// Returns the most recently stored snapshot, if any write succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Transport`] when the internal lock is
    /// poisoned.
    pub fn last_replaced(&self) -> RemoteStoreResult<Option<Board>> {
        let state = read_state(&self.state)?;
        Ok(state.replaced.last().cloned())
    }

    /// Returns the currently stored board.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Transport`] when the internal lock is
    /// poisoned.
    pub fn stored_board(&self) -> RemoteStoreResult<Board> {
        let state = read_state(&self.state)?;
        Ok(state.board.clone())
    }
}

fn read_state(
    state: &Arc<RwLock<InMemoryState>>,
) -> RemoteStoreResult<std::sync::RwLockReadGuard<'_, InMemoryState>> {
    state
        .read()
        .map_err(|err| RemoteStoreError::transport(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl RemoteBoardStore for InMemoryBoardStore {
    async fn fetch(&self) -> RemoteStoreResult<Board> {
        let state = read_state(&self.state)?;
        if state.fail_fetch {
            return Err(RemoteStoreError::transport(std::io::Error::other(
                "injected fetch failure",
            )));
        }
        Ok(state.board.clone())
    }

    async fn replace(&self, board: &Board) -> RemoteStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RemoteStoreError::transport(std::io::Error::other(err.to_string())))?;
        state.replace_attempts += 1;
        if state.fail_replace {
            return Err(RemoteStoreError::transport(std::io::Error::other(
                "injected replace failure",
            )));
        }
        state.board = board.clone();
        state.replaced.push(board.clone());
        Ok(())
    }
}
