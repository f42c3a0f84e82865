//! Operational endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ClaClient;
use crate::error::Result;
use cla_core::Operation;

/// Build information reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseVersion {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub commit: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub build_date: String,
}

impl ClaClient {
    /// Backend release version.
    pub async fn get_release_version(&self) -> Result<Value> {
        self.call(Operation::GetReleaseVersion, &[], None).await
    }

    /// Backend release version, decoded.
    pub async fn release_version(&self) -> Result<ReleaseVersion> {
        self.call_as(Operation::GetReleaseVersion, &[], None).await
    }
}
