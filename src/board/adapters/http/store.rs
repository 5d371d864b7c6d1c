//! HTTP implementation of the remote board store.

use super::models::BoardPayload;
use crate::board::domain::Board;
use crate::board::ports::{RemoteBoardStore, RemoteStoreError, RemoteStoreResult};
use async_trait::async_trait;

/// Default endpoint of the remote task store.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Remote board store speaking the `GET /tasks` / `PUT /tasks` contract.
#[derive(Debug, Clone)]
pub struct HttpBoardStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBoardStore {
    /// Creates a store against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a store with a caller-configured HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }
}

impl Default for HttpBoardStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl RemoteBoardStore for HttpBoardStore {
    async fn fetch(&self) -> RemoteStoreResult<Board> {
        let payload: BoardPayload = self
            .client
            .get(self.tasks_url())
            .send()
            .await
            .map_err(RemoteStoreError::transport)?
            .error_for_status()
            .map_err(RemoteStoreError::transport)?
            .json()
            .await
            .map_err(RemoteStoreError::transport)?;
        Ok(payload.into_board()?)
    }

    async fn replace(&self, board: &Board) -> RemoteStoreResult<()> {
        // Response body is ignored by contract; only the status matters.
        self.client
            .put(self.tasks_url())
            .json(&BoardPayload::from_board(board))
            .send()
            .await
            .map_err(RemoteStoreError::transport)?
            .error_for_status()
            .map_err(RemoteStoreError::transport)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_url_appends_path_to_base() {
        let store = HttpBoardStore::new("http://example.test:9999");
        assert_eq!(store.tasks_url(), "http://example.test:9999/tasks");
    }

    #[test]
    fn default_store_targets_local_endpoint() {
        let store = HttpBoardStore::default();
        assert_eq!(store.tasks_url(), "http://localhost:5000/tasks");
    }
}
