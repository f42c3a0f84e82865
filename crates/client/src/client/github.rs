//! GitHub organization, installation and activity operations.

use serde::Serialize;
use serde_json::Value;

use super::{to_body, ClaClient};
use crate::error::Result;
use cla_core::Operation;

impl ClaClient {
    /// List registered GitHub organizations.
    pub async fn get_github_organizations(&self) -> Result<Value> {
        self.call(Operation::GetGithubOrganizations, &[], None).await
    }

    /// Register a GitHub organization with a project.
    ///
    /// On failure the backend explains itself in the error body; see
    /// [`crate::ClientError::server_message`].
    pub async fn post_github_organization<T: Serialize + ?Sized>(
        &self,
        organization: &T,
    ) -> Result<Value> {
        let body = to_body(organization)?;
        self.call(Operation::PostGithubOrganization, &[], Some(&body))
            .await
    }

    /// Look up a GitHub namespace.
    pub async fn get_github_get_namespace(&self, namespace: &str) -> Result<Value> {
        self.call(Operation::GetGithubGetNamespace, &[namespace], None)
            .await
    }

    /// Check whether a GitHub namespace exists.
    pub async fn get_github_check_namespace(&self, namespace: &str) -> Result<Value> {
        self.call(Operation::GetGithubCheckNamespace, &[namespace], None)
            .await
    }

    /// Get a registered organization by name.
    pub async fn get_github_organization(&self, organization_name: &str) -> Result<Value> {
        self.call(Operation::GetGithubOrganization, &[organization_name], None)
            .await
    }

    /// Remove a registered organization.
    pub async fn delete_github_organization(&self, organization_name: &str) -> Result<Value> {
        self.call(
            Operation::DeleteGithubOrganization,
            &[organization_name],
            None,
        )
        .await
    }

    /// List repositories of a registered organization.
    pub async fn get_github_organization_repositories(
        &self,
        organization_name: &str,
    ) -> Result<Value> {
        self.call(
            Operation::GetGithubOrganizationRepositories,
            &[organization_name],
            None,
        )
        .await
    }

    /// GitHub app installation callback (GET).
    pub async fn get_github_installation(&self) -> Result<Value> {
        self.call(Operation::GetGithubInstallation, &[], None).await
    }

    /// GitHub app installation callback (POST).
    pub async fn post_github_installation(&self) -> Result<Value> {
        self.call(Operation::PostGithubInstallation, &[], None).await
    }

    /// GitHub webhook activity.
    pub async fn post_github_activity(&self) -> Result<Value> {
        self.call(Operation::PostGithubActivity, &[], None).await
    }

    /// GitHub webhook validation.
    pub async fn post_github_validate(&self) -> Result<Value> {
        self.call(Operation::PostGithubValidate, &[], None).await
    }
}
