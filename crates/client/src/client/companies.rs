//! Company API operations.

use serde::Serialize;
use serde_json::Value;

use super::{to_body, ClaClient};
use crate::error::Result;
use cla_core::Operation;

impl ClaClient {
    /// Companies of the current user.
    pub async fn get_companies(&self) -> Result<Value> {
        self.call(Operation::GetCompanies, &[], None).await
    }

    /// Every company known to the backend.
    pub async fn get_all_companies(&self) -> Result<Value> {
        self.call(Operation::GetAllCompanies, &[], None).await
    }

    /// Create a company.
    pub async fn post_company<T: Serialize + ?Sized>(&self, company: &T) -> Result<Value> {
        let body = to_body(company)?;
        self.call(Operation::PostCompany, &[], Some(&body)).await
    }

    /// Update a company.
    pub async fn put_company<T: Serialize + ?Sized>(&self, company: &T) -> Result<Value> {
        let body = to_body(company)?;
        self.call(Operation::PutCompany, &[], Some(&body)).await
    }

    /// Get company by ID.
    pub async fn get_company(&self, company_id: &str) -> Result<Value> {
        self.call(Operation::GetCompany, &[company_id], None).await
    }

    /// Delete company by ID.
    pub async fn delete_company(&self, company_id: &str) -> Result<Value> {
        self.call(Operation::DeleteCompany, &[company_id], None).await
    }

    /// Request addition to a company's CCLA approved list for a project.
    ///
    /// The backend answers with an empty or non-JSON body, so the text is
    /// returned as is.
    pub async fn post_ccla_whitelist_request<T: Serialize + ?Sized>(
        &self,
        company_id: &str,
        project_id: &str,
        user: &T,
    ) -> Result<String> {
        let body = to_body(user)?;
        self.call_raw(
            Operation::PostCclaWhitelistRequest,
            &[company_id, project_id],
            Some(&body),
        )
        .await
    }
}
