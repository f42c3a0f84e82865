//! Signature API operations.

use serde::Serialize;
use serde_json::Value;

use super::{to_body, ClaClient};
use crate::error::Result;
use cla_core::{Operation, SignaturePage};

impl ClaClient {
    /// List all signatures.
    pub async fn get_signatures(&self) -> Result<Value> {
        self.call(Operation::GetSignatures, &[], None).await
    }

    /// Create a signature.
    pub async fn post_signature<T: Serialize + ?Sized>(&self, signature: &T) -> Result<Value> {
        let body = to_body(signature)?;
        self.call(Operation::PostSignature, &[], Some(&body)).await
    }

    /// Update a signature. The payload carries `signature_id`.
    pub async fn put_signature<T: Serialize + ?Sized>(&self, signature: &T) -> Result<Value> {
        let body = to_body(signature)?;
        self.call(Operation::PutSignature, &[], Some(&body)).await
    }

    /// Get signature by ID.
    pub async fn get_signature(&self, signature_id: &str) -> Result<Value> {
        self.call(Operation::GetSignature, &[signature_id], None).await
    }

    /// Delete signature by ID.
    pub async fn delete_signature(&self, signature_id: &str) -> Result<Value> {
        self.call(Operation::DeleteSignature, &[signature_id], None)
            .await
    }

    /// List signatures referencing a user.
    pub async fn get_signatures_user(&self, user_id: &str) -> Result<Value> {
        self.call(Operation::GetSignaturesUser, &[user_id], None).await
    }

    /// List signatures of a company.
    pub async fn get_company_signatures(&self, company_id: &str) -> Result<Value> {
        self.call(Operation::GetCompanySignatures, &[company_id], None)
            .await
    }

    /// List the CLA managers of a signature.
    pub async fn get_cla_managers(&self, signature_id: &str) -> Result<Value> {
        self.call(Operation::GetClaManagers, &[signature_id], None)
            .await
    }

    /// One page of a company's signatures for a project.
    ///
    /// The response carries the cursor for the next page, if any.
    pub async fn get_company_project_signatures(
        &self,
        company_id: &str,
        project_id: &str,
        page: &SignaturePage,
    ) -> Result<Value> {
        self.call_with_query(
            Operation::GetCompanyProjectSignatures,
            &[project_id, company_id],
            &page.query_string(),
            None,
        )
        .await
    }

    /// List signatures of a project.
    pub async fn get_project_signatures(&self, project_id: &str) -> Result<Value> {
        self.call(Operation::GetProjectSignatures, &[project_id], None)
            .await
    }
}
