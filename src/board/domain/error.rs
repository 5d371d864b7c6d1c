//! Error types for board domain validation and transitions.

use thiserror::Error;

use super::Status;

/// Errors returned by board domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The position does not exist in the addressed list.
    #[error("no task at index {index} in the {status} list (length {len})")]
    PositionOutOfRange {
        /// List that was addressed.
        status: Status,
        /// Requested position.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// The edit session's recorded target no longer refers to the task
    /// captured when editing began.
    #[error("edit target is no longer valid, the board changed since editing began")]
    InvalidEditTarget,

    /// The operation requires an active edit session.
    #[error("no edit session is active")]
    NoActiveEditSession,

    /// Adding tasks is disabled while an edit session is active.
    #[error("an edit session is active, save or cancel it first")]
    EditSessionActive,
}

/// Error returned while parsing status values from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);
