//! User API operations.

use serde::Serialize;
use serde_json::Value;

use super::{to_body, ClaClient};
use crate::error::Result;
use cla_core::Operation;

impl ClaClient {
    /// List all users.
    pub async fn get_users(&self) -> Result<Value> {
        self.call(Operation::GetUsers, &[], None).await
    }

    /// Create a user.
    pub async fn post_user<T: Serialize + ?Sized>(&self, user: &T) -> Result<Value> {
        let body = to_body(user)?;
        self.call(Operation::PostUser, &[], Some(&body)).await
    }

    /// Update a user. The payload carries `user_id`.
    pub async fn put_user<T: Serialize + ?Sized>(&self, user: &T) -> Result<Value> {
        let body = to_body(user)?;
        self.call(Operation::PutUser, &[], Some(&body)).await
    }

    /// Get user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Value> {
        self.call(Operation::GetUser, &[user_id], None).await
    }

    /// Get user by ID through the v3 API, with session credentials.
    pub async fn get_user_by_user_id(&self, user_id: &str) -> Result<Value> {
        self.call(Operation::GetUserByUserId, &[user_id], None).await
    }

    /// Get user by username, with session credentials.
    pub async fn get_user_by_user_name(&self, user_name: &str) -> Result<Value> {
        self.call(Operation::GetUserByUserName, &[user_name], None)
            .await
    }

    /// Get user by ID, authenticated with the bearer token.
    pub async fn get_user_with_auth_token(&self, user_id: &str) -> Result<Value> {
        self.call(Operation::GetUserWithAuthToken, &[user_id], None)
            .await
    }

    /// Delete user by ID.
    pub async fn delete_user(&self, user_id: &str) -> Result<Value> {
        self.call(Operation::DeleteUser, &[user_id], None).await
    }

    /// Get user by email address.
    pub async fn get_user_by_email(&self, user_email: &str) -> Result<Value> {
        self.call(Operation::GetUserByEmail, &[user_email], None).await
    }

    /// Create or fetch the account of the authenticated Gerrit user.
    pub async fn post_or_get_user_for_gerrit(&self) -> Result<Value> {
        self.call(Operation::PostOrGetUserForGerrit, &[], None).await
    }

    /// Get user by GitHub ID.
    pub async fn get_user_by_github_id(&self, user_github_id: &str) -> Result<Value> {
        self.call(Operation::GetUserByGithubId, &[user_github_id], None)
            .await
    }

    /// List the signatures of a user.
    pub async fn get_user_signatures(&self, user_id: &str) -> Result<Value> {
        self.call(Operation::GetUserSignatures, &[user_id], None).await
    }

    /// List users belonging to a company.
    pub async fn get_users_by_company_id(&self, company_id: &str) -> Result<Value> {
        self.call(Operation::GetUsersByCompanyId, &[company_id], None)
            .await
    }

    /// Ask a company's CLA manager to add the user to the approved list.
    pub async fn post_user_message_to_company_manager<T: Serialize + ?Sized>(
        &self,
        user_id: &str,
        company_id: &str,
        message: &T,
    ) -> Result<Value> {
        let body = to_body(message)?;
        self.call(
            Operation::PostUserMessageToCompanyManager,
            &[user_id, company_id],
            Some(&body),
        )
        .await
    }

    /// Invite a company admin by email.
    pub async fn post_email_to_company_admin<T: Serialize + ?Sized>(
        &self,
        user_id: &str,
        data: &T,
    ) -> Result<Value> {
        let body = to_body(data)?;
        self.call(Operation::PostEmailToCompanyAdmin, &[user_id], Some(&body))
            .await
    }

    /// Get the signature the user is currently in the middle of.
    pub async fn get_user_signature_intent(&self, user_id: &str) -> Result<Value> {
        self.call(Operation::GetUserSignatureIntent, &[user_id], None)
            .await
    }

    /// Get the latest individual signature of a user on a project.
    pub async fn get_last_individual_signature(
        &self,
        user_id: &str,
        project_id: &str,
    ) -> Result<Value> {
        self.call(
            Operation::GetLastIndividualSignature,
            &[user_id, project_id],
            None,
        )
        .await
    }
}
