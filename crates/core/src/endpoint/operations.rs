//! The static routing table.
//!
//! Every logical operation the client exposes maps to exactly one endpoint.
//! The (method, path, version, auth) tuples mirror the backend's routes and
//! must not drift from them.

use serde::Serialize;

use super::types::{ApiVersion, Auth, Endpoint, HttpMethod};

const fn get(version: ApiVersion, path: &'static str) -> Endpoint {
    Endpoint::new(HttpMethod::Get, version, path)
}

const fn post(version: ApiVersion, path: &'static str) -> Endpoint {
    Endpoint::new(HttpMethod::Post, version, path)
}

const fn put(version: ApiVersion, path: &'static str) -> Endpoint {
    Endpoint::new(HttpMethod::Put, version, path)
}

const fn delete(version: ApiVersion, path: &'static str) -> Endpoint {
    Endpoint::new(HttpMethod::Delete, version, path)
}

macro_rules! operations {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, $endpoint:expr; )+) => {
        /// A logical backend operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Operation {
            $( $(#[$doc])* $variant, )+
        }

        impl Operation {
            /// Every operation, in table order.
            pub const ALL: &'static [Operation] = &[ $( Operation::$variant, )+ ];

            /// Stable snake_case name, used in logs and listings.
            pub fn name(self) -> &'static str {
                match self {
                    $( Operation::$variant => $name, )+
                }
            }

            /// The endpoint this operation is routed to.
            pub fn endpoint(self) -> Endpoint {
                use ApiVersion::{V1, V2, V3};
                match self {
                    $( Operation::$variant => $endpoint, )+
                }
            }
        }
    };
}

operations! {
    // user
    GetUsers => "get_users", get(V1, "/v1/user");
    PostUser => "post_user", post(V1, "/v1/user");
    PutUser => "put_user", put(V1, "/v1/user");
    GetUser => "get_user", get(V2, "/v2/user/{user_id}");
    GetUserByUserId => "get_user_by_user_id",
        get(V3, "/v3/users/{user_id}").with_auth(Auth::Cookie);
    GetUserByUserName => "get_user_by_user_name",
        get(V3, "/v3/users/username/{user_name}").with_auth(Auth::Cookie);
    GetUserWithAuthToken => "get_user_with_auth_token",
        get(V2, "/v2/user/{user_id}").with_auth(Auth::Bearer);
    DeleteUser => "delete_user", delete(V1, "/v1/user/{user_id}");
    GetUserByEmail => "get_user_by_email", get(V1, "/v1/user/email/{user_email}");
    /// Creates the user on first call, returns the existing one afterwards.
    PostOrGetUserForGerrit => "post_or_get_user_for_gerrit",
        post(V1, "/v1/user/gerrit").with_auth(Auth::Bearer);
    GetUserByGithubId => "get_user_by_github_id", get(V1, "/v1/user/github/{user_github_id}");
    GetUserSignatures => "get_user_signatures", get(V1, "/v1/user/{user_id}/signatures");
    GetUsersByCompanyId => "get_users_by_company_id", get(V1, "/v1/users/company/{company_id}");
    PostUserMessageToCompanyManager => "post_user_message_to_company_manager",
        post(V2, "/v2/user/{user_id}/request-company-whitelist/{company_id}");
    PostEmailToCompanyAdmin => "post_email_to_company_admin",
        post(V2, "/v2/user/{user_id}/invite-company-admin/");
    GetUserSignatureIntent => "get_user_signature_intent",
        get(V2, "/v2/user/{user_id}/active-signature");
    GetLastIndividualSignature => "get_last_individual_signature",
        get(V2, "/v2/user/{user_id}/project/{project_id}/last-signature");

    // signature
    GetSignatures => "get_signatures", get(V1, "/v1/signature");
    PostSignature => "post_signature", post(V1, "/v1/signature");
    PutSignature => "put_signature", put(V1, "/v1/signature");
    GetSignature => "get_signature", get(V1, "/v1/signature/{signature_id}");
    DeleteSignature => "delete_signature", delete(V1, "/v1/signature/{signature_id}");
    GetSignaturesUser => "get_signatures_user", get(V1, "/v1/signatures/user/{user_id}");
    GetCompanySignatures => "get_company_signatures",
        get(V1, "/v1/signatures/company/{company_id}");
    GetClaManagers => "get_cla_managers", get(V1, "/v1/signature/{signature_id}/manager");
    /// Paginated; see [`crate::SignaturePage`].
    GetCompanyProjectSignatures => "get_company_project_signatures",
        get(V3, "/v3/signatures/project/{project_id}/company/{company_id}").with_auth(Auth::Cookie);
    GetProjectSignatures => "get_project_signatures",
        get(V1, "/v1/signatures/project/{project_id}");

    // repository
    GetRepositories => "get_repositories", get(V1, "/v1/repository");
    PostRepository => "post_repository", post(V1, "/v1/repository");
    PutRepository => "put_repository", put(V1, "/v1/repository");
    GetRepository => "get_repository", get(V1, "/v1/repository/{repository_id}");
    DeleteRepository => "delete_repository", delete(V1, "/v1/repository/{repository_id}");

    // company
    GetCompanies => "get_companies", get(V1, "/v1/company");
    GetAllCompanies => "get_all_companies", get(V2, "/v2/company");
    PostCompany => "post_company", post(V1, "/v1/company");
    PutCompany => "put_company", put(V1, "/v1/company");
    GetCompany => "get_company", get(V2, "/v2/company/{company_id}");
    DeleteCompany => "delete_company", delete(V1, "/v1/company/{company_id}");
    PostCclaWhitelistRequest => "post_ccla_whitelist_request",
        post(V3, "/v3/company/{company_id}/ccla_whitelist_requests/{project_id}").raw();

    // project
    GetProjects => "get_projects", get(V1, "/v1/project");
    GetProjectsCcla => "get_projects_ccla", get(V1, "/v1/project/ccla");
    PostProject => "post_project", post(V1, "/v1/project");
    PutProject => "put_project", put(V1, "/v1/project");
    GetProject => "get_project", get(V2, "/v2/project/{project_id}");
    GetProjectWithAuthToken => "get_project_with_auth_token",
        get(V2, "/v2/project/{project_id}").with_auth(Auth::Bearer);
    GetProjectsByExternalId => "get_projects_by_external_id",
        get(V1, "/v1/project/external/{external_id}");
    DeleteProject => "delete_project", delete(V1, "/v1/project/{project_id}");
    GetProjectRepositories => "get_project_repositories",
        get(V1, "/v1/project/{project_id}/repositories");
    GetProjectCompanies => "get_project_companies", get(V2, "/v2/project/{project_id}/companies");
    GetProjectDocument => "get_project_document",
        get(V2, "/v2/project/{project_id}/document/{document_type}");
    PostProjectDocument => "post_project_document",
        post(V1, "/v1/project/{project_id}/document/{document_type}");
    PostProjectDocumentTemplate => "post_project_document_template",
        post(V1, "/v1/project/{project_id}/document/template/{document_type}");
    DeleteProjectDocumentRevision => "delete_project_document_revision",
        delete(V1, "/v1/project/{project_id}/document/{document_type}/{major_version}/{minor_version}");
    /// Link target only; the client never fetches it.
    ProjectDocumentRevisionPdf => "project_document_revision_pdf",
        get(V1, "/v1/project/{project_id}/document/{document_type}/pdf/{major_version}/{minor_version}").raw();
    GetProjectGerrits => "get_project_gerrits",
        get(V1, "/v1/project/{project_id}/gerrits").with_auth(Auth::Bearer);

    // signing flows
    PostIndividualSignatureRequest => "post_individual_signature_request",
        post(V2, "/v2/request-individual-signature");
    PostCheckedAndPreparedEmployeeSignature => "post_checked_and_prepared_employee_signature",
        post(V2, "/v2/check-prepare-employee-signature");
    PostEmployeeSignatureRequest => "post_employee_signature_request",
        post(V2, "/v2/request-employee-signature");
    PostCorporateSignatureRequest => "post_corporate_signature_request",
        post(V1, "/v1/request-corporate-signature");
    PostSigned => "post_signed",
        post(V1, "/v1/signed/{installation_id}/{github_repository_id}/{change_request_id}");
    GetReturnUrl => "get_return_url", get(V2, "/v2/return-url/{signature_id}");
    GetSignRequest => "get_sign_request",
        get(V2, "/v2/repository-provider/{provider}/sign/{installation_id}/{github_repository_id}/{change_request_id}");
    /// SVG document, not JSON.
    GetChangeIcon => "get_change_icon",
        get(V2, "/v2/repository-provider/{provider}/icon.svg").raw();
    PostReceivedActivity => "post_received_activity",
        post(V2, "/v2/repository-provider/{provider}/activity");

    // github
    GetGithubOrganizations => "get_github_organizations", get(V1, "/v1/github/organizations");
    PostGithubOrganization => "post_github_organization", post(V1, "/v1/github/organizations");
    GetGithubGetNamespace => "get_github_get_namespace",
        get(V1, "/v1/github/get/namespace/{namespace}");
    GetGithubCheckNamespace => "get_github_check_namespace",
        get(V1, "/v1/github/check/namespace/{namespace}");
    GetGithubOrganization => "get_github_organization",
        get(V1, "/v1/github/organizations/{organization_name}");
    DeleteGithubOrganization => "delete_github_organization",
        delete(V1, "/v1/github/organizations/{organization_name}");
    GetGithubOrganizationRepositories => "get_github_organization_repositories",
        get(V1, "/v1/github/organizations/{organization_name}/repositories");
    GetGithubInstallation => "get_github_installation", get(V2, "/v2/github/installation");
    PostGithubInstallation => "post_github_installation", post(V2, "/v2/github/installation");
    PostGithubActivity => "post_github_activity", post(V2, "/v2/github/activity");
    PostGithubValidate => "post_github_validate", post(V1, "/v1/github/validate");

    // gerrit
    GetGerrit => "get_gerrit", get(V2, "/v2/gerrit/{gerrit_id}").with_auth(Auth::Bearer);

    // ops
    GetReleaseVersion => "get_release_version", get(V3, "/v3/ops/version");
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::endpoint::types::ResponseKind;

    #[test]
    fn test_every_path_starts_with_its_version_prefix() {
        for op in Operation::ALL {
            let endpoint = op.endpoint();
            assert!(
                endpoint.path.starts_with(endpoint.version.prefix()),
                "{} has path {} outside {}",
                op.name(),
                endpoint.path,
                endpoint.version
            );
        }
    }

    #[test]
    fn test_every_endpoint_has_a_surface() {
        for op in Operation::ALL {
            assert!(op.endpoint().surface().is_some(), "{}", op.name());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Operation::ALL.iter().map(|op| op.name()).collect();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn test_table_size() {
        assert_eq!(Operation::ALL.len(), 77);
    }

    #[test]
    fn test_credentialed_operations() {
        let cookie: Vec<_> = Operation::ALL
            .iter()
            .filter(|op| op.endpoint().auth == Auth::Cookie)
            .copied()
            .collect();
        assert_eq!(
            cookie,
            vec![
                Operation::GetUserByUserId,
                Operation::GetUserByUserName,
                Operation::GetCompanyProjectSignatures,
            ]
        );

        let bearer: Vec<_> = Operation::ALL
            .iter()
            .filter(|op| op.endpoint().auth == Auth::Bearer)
            .copied()
            .collect();
        assert_eq!(
            bearer,
            vec![
                Operation::GetUserWithAuthToken,
                Operation::PostOrGetUserForGerrit,
                Operation::GetProjectWithAuthToken,
                Operation::GetProjectGerrits,
                Operation::GetGerrit,
            ]
        );
    }

    #[test]
    fn test_raw_operations() {
        let raw: Vec<_> = Operation::ALL
            .iter()
            .filter(|op| op.endpoint().response == ResponseKind::Raw)
            .copied()
            .collect();
        assert_eq!(
            raw,
            vec![
                Operation::PostCclaWhitelistRequest,
                Operation::ProjectDocumentRevisionPdf,
                Operation::GetChangeIcon,
            ]
        );
    }

    #[test]
    fn test_representative_routes() {
        let user = Operation::GetUser.endpoint();
        assert_eq!(user.method, HttpMethod::Get);
        assert_eq!(user.version, ApiVersion::V2);
        assert_eq!(user.path, "/v2/user/{user_id}");

        let delete_user = Operation::DeleteUser.endpoint();
        assert_eq!(delete_user.method, HttpMethod::Delete);
        assert_eq!(delete_user.version, ApiVersion::V1);

        let version = Operation::GetReleaseVersion.endpoint();
        assert_eq!(version.version, ApiVersion::V3);
        assert_eq!(version.path, "/v3/ops/version");

        let invite = Operation::PostEmailToCompanyAdmin.endpoint();
        assert_eq!(invite.path, "/v2/user/{user_id}/invite-company-admin/");
    }

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&Operation::GetCompanyProjectSignatures).unwrap();
        assert_eq!(json, "\"get_company_project_signatures\"");
        assert_eq!(
            Operation::GetCompanyProjectSignatures.name(),
            "get_company_project_signatures"
        );
    }
}
