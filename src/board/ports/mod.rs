//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! service.

pub mod remote;

pub use remote::{RemoteBoardStore, RemoteStoreError, RemoteStoreResult};

#[cfg(test)]
pub use remote::MockRemoteBoardStore;
