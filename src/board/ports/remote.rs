//! Remote store port: the durable copy of the whole board.

use crate::board::domain::{Board, BoardDomainError};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote store operations.
pub type RemoteStoreResult<T> = Result<T, RemoteStoreError>;

/// Contract for the remote task store holding the durable board copy.
///
/// The remote copy is always replaced wholesale: there is no partial
/// update and the last writer wins.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RemoteBoardStore: Send + Sync {
    /// Fetches the full board.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Transport`] when the store cannot be
    /// reached or answers with a non-success status, or
    /// [`RemoteStoreError::InvalidBoard`] when the returned data fails
    /// domain validation.
    async fn fetch(&self) -> RemoteStoreResult<Board>;

    /// Overwrites the full stored board with the given snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Transport`] when the store cannot be
    /// reached or rejects the write.
    async fn replace(&self, board: &Board) -> RemoteStoreResult<()>;
}

/// Errors returned by remote store implementations.
#[derive(Debug, Clone, Error)]
pub enum RemoteStoreError {
    /// The store could not be reached or answered with a failure status.
    #[error("remote store transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The store returned a board that fails domain validation.
    #[error("remote store returned an invalid board: {0}")]
    InvalidBoard(#[from] BoardDomainError),
}

impl RemoteStoreError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
