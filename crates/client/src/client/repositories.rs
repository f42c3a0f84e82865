//! Repository API operations.

use serde::Serialize;
use serde_json::Value;

use super::{to_body, ClaClient};
use crate::error::Result;
use cla_core::Operation;

impl ClaClient {
    /// List all repositories.
    pub async fn get_repositories(&self) -> Result<Value> {
        self.call(Operation::GetRepositories, &[], None).await
    }

    /// Register a repository.
    pub async fn post_repository<T: Serialize + ?Sized>(&self, repository: &T) -> Result<Value> {
        let body = to_body(repository)?;
        self.call(Operation::PostRepository, &[], Some(&body)).await
    }

    /// Update a repository.
    pub async fn put_repository<T: Serialize + ?Sized>(&self, repository: &T) -> Result<Value> {
        let body = to_body(repository)?;
        self.call(Operation::PutRepository, &[], Some(&body)).await
    }

    /// Get repository by ID.
    pub async fn get_repository(&self, repository_id: &str) -> Result<Value> {
        self.call(Operation::GetRepository, &[repository_id], None)
            .await
    }

    /// Delete repository by ID.
    pub async fn delete_repository(&self, repository_id: &str) -> Result<Value> {
        self.call(Operation::DeleteRepository, &[repository_id], None)
            .await
    }
}
