//! Project API operations.

use serde::Serialize;
use serde_json::Value;

use super::{to_body, ClaClient};
use crate::error::Result;
use cla_core::Operation;

impl ClaClient {
    /// List all projects.
    pub async fn get_projects(&self) -> Result<Value> {
        self.call(Operation::GetProjects, &[], None).await
    }

    /// List projects with corporate CLAs enabled.
    pub async fn get_projects_ccla(&self) -> Result<Value> {
        self.call(Operation::GetProjectsCcla, &[], None).await
    }

    /// Create a project.
    pub async fn post_project<T: Serialize + ?Sized>(&self, project: &T) -> Result<Value> {
        let body = to_body(project)?;
        self.call(Operation::PostProject, &[], Some(&body)).await
    }

    /// Update a project.
    pub async fn put_project<T: Serialize + ?Sized>(&self, project: &T) -> Result<Value> {
        let body = to_body(project)?;
        self.call(Operation::PutProject, &[], Some(&body)).await
    }

    /// Get project by ID.
    pub async fn get_project(&self, project_id: &str) -> Result<Value> {
        self.call(Operation::GetProject, &[project_id], None).await
    }

    /// Get project by ID, authenticated with the bearer token.
    pub async fn get_project_with_auth_token(&self, project_id: &str) -> Result<Value> {
        self.call(Operation::GetProjectWithAuthToken, &[project_id], None)
            .await
    }

    /// List projects by their external (SFDC) ID.
    pub async fn get_projects_by_external_id(&self, external_id: &str) -> Result<Value> {
        self.call(Operation::GetProjectsByExternalId, &[external_id], None)
            .await
    }

    /// Delete project by ID.
    pub async fn delete_project(&self, project_id: &str) -> Result<Value> {
        self.call(Operation::DeleteProject, &[project_id], None).await
    }

    /// List repositories attached to a project.
    pub async fn get_project_repositories(&self, project_id: &str) -> Result<Value> {
        self.call(Operation::GetProjectRepositories, &[project_id], None)
            .await
    }

    /// List companies that signed a project's CCLA.
    pub async fn get_project_companies(&self, project_id: &str) -> Result<Value> {
        self.call(Operation::GetProjectCompanies, &[project_id], None)
            .await
    }

    /// Get the current document of the given type (`individual` or `corporate`).
    pub async fn get_project_document(
        &self,
        project_id: &str,
        document_type: &str,
    ) -> Result<Value> {
        self.call(
            Operation::GetProjectDocument,
            &[project_id, document_type],
            None,
        )
        .await
    }

    /// Upload a new document revision.
    pub async fn post_project_document<T: Serialize + ?Sized>(
        &self,
        project_id: &str,
        document_type: &str,
        document: &T,
    ) -> Result<Value> {
        let body = to_body(document)?;
        self.call(
            Operation::PostProjectDocument,
            &[project_id, document_type],
            Some(&body),
        )
        .await
    }

    /// Create a new document revision from a template.
    pub async fn post_project_document_template<T: Serialize + ?Sized>(
        &self,
        project_id: &str,
        document_type: &str,
        document: &T,
    ) -> Result<Value> {
        let body = to_body(document)?;
        self.call(
            Operation::PostProjectDocumentTemplate,
            &[project_id, document_type],
            Some(&body),
        )
        .await
    }

    /// Delete a specific document revision.
    pub async fn delete_project_document_revision(
        &self,
        project_id: &str,
        document_type: &str,
        major_version: &str,
        minor_version: &str,
    ) -> Result<Value> {
        self.call(
            Operation::DeleteProjectDocumentRevision,
            &[project_id, document_type, major_version, minor_version],
            None,
        )
        .await
    }

    /// URL of a document revision's PDF, for linking. Sends nothing.
    pub fn project_document_revision_pdf_url(
        &self,
        project_id: &str,
        document_type: &str,
        major_version: &str,
        minor_version: &str,
    ) -> Result<String> {
        self.url_for(
            Operation::ProjectDocumentRevisionPdf,
            &[project_id, document_type, major_version, minor_version],
            "",
        )
    }

    /// List the Gerrit instances of a project.
    pub async fn get_project_gerrits(&self, project_id: &str) -> Result<Value> {
        self.call(Operation::GetProjectGerrits, &[project_id], None)
            .await
    }
}
