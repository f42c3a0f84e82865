//! Gerrit instance operations.

use serde_json::Value;

use super::ClaClient;
use crate::error::Result;
use cla_core::Operation;

impl ClaClient {
    /// Get a Gerrit instance by ID.
    pub async fn get_gerrit(&self, gerrit_id: &str) -> Result<Value> {
        self.call(Operation::GetGerrit, &[gerrit_id], None).await
    }
}
