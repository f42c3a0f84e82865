//! Signing flow operations: signature requests, return URLs and
//! repository-provider callbacks.

use serde::Serialize;
use serde_json::Value;

use super::{to_body, ClaClient};
use crate::error::Result;
use cla_core::Operation;

impl ClaClient {
    /// Start an individual signature.
    pub async fn post_individual_signature_request<T: Serialize + ?Sized>(
        &self,
        request: &T,
    ) -> Result<Value> {
        let body = to_body(request)?;
        self.call(Operation::PostIndividualSignatureRequest, &[], Some(&body))
            .await
    }

    /// Check whether an employee may sign and prepare the signature.
    pub async fn post_checked_and_prepared_employee_signature<T: Serialize + ?Sized>(
        &self,
        data: &T,
    ) -> Result<Value> {
        let body = to_body(data)?;
        self.call(
            Operation::PostCheckedAndPreparedEmployeeSignature,
            &[],
            Some(&body),
        )
        .await
    }

    /// Start an employee signature.
    pub async fn post_employee_signature_request<T: Serialize + ?Sized>(
        &self,
        request: &T,
    ) -> Result<Value> {
        let body = to_body(request)?;
        self.call(Operation::PostEmployeeSignatureRequest, &[], Some(&body))
            .await
    }

    /// Start a corporate signature.
    pub async fn post_corporate_signature_request<T: Serialize + ?Sized>(
        &self,
        request: &T,
    ) -> Result<Value> {
        let body = to_body(request)?;
        self.call(Operation::PostCorporateSignatureRequest, &[], Some(&body))
            .await
    }

    /// Notify the backend that a change request's CLA was signed.
    pub async fn post_signed(
        &self,
        installation_id: &str,
        github_repository_id: &str,
        change_request_id: &str,
    ) -> Result<Value> {
        self.call(
            Operation::PostSigned,
            &[installation_id, github_repository_id, change_request_id],
            None,
        )
        .await
    }

    /// Where to send the user once a signature completes.
    pub async fn get_return_url(&self, signature_id: &str) -> Result<Value> {
        self.call(Operation::GetReturnUrl, &[signature_id], None).await
    }

    /// Signing redirect for a change request on a repository provider.
    pub async fn get_sign_request(
        &self,
        provider: &str,
        installation_id: &str,
        github_repository_id: &str,
        change_request_id: &str,
    ) -> Result<Value> {
        self.call(
            Operation::GetSignRequest,
            &[
                provider,
                installation_id,
                github_repository_id,
                change_request_id,
            ],
            None,
        )
        .await
    }

    /// The provider's status icon, as SVG text.
    pub async fn get_change_icon(&self, provider: &str) -> Result<String> {
        self.call_raw(Operation::GetChangeIcon, &[provider], None).await
    }

    /// Forward a repository-provider activity event.
    pub async fn post_received_activity(&self, provider: &str) -> Result<Value> {
        self.call(Operation::PostReceivedActivity, &[provider], None)
            .await
    }
}
