//! Pure functions for turning a path template into a concrete path.

use super::{Endpoint, EndpointError, Result};

/// Substitutes `params`, in order, into the placeholders of `endpoint.path`.
///
/// Each value is percent-encoded so it stays a single path segment. Values
/// are otherwise passed through untouched; callers are responsible for their
/// shape.
///
/// # Examples
///
/// ```
/// use cla_core::{render_path, Operation};
///
/// let path = render_path(&Operation::GetUserByEmail.endpoint(), &["jane@example.org"]).unwrap();
/// assert_eq!(path, "/v1/user/email/jane%40example.org");
/// ```
pub fn render_path(endpoint: &Endpoint, params: &[&str]) -> Result<String> {
    let template = endpoint.path;
    let expected = template.matches('{').count();
    if expected != params.len() {
        return Err(EndpointError::ParamCount {
            template,
            expected,
            got: params.len(),
        });
    }

    let mut path = String::with_capacity(template.len() + 16 * params.len());
    let mut rest = template;
    let mut values = params.iter();
    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let end = rest[start..]
            .find('}')
            .map(|offset| start + offset)
            .unwrap_or(rest.len() - 1);
        if let Some(value) = values.next() {
            path.push_str(&urlencoding::encode(value));
        }
        rest = &rest[end + 1..];
    }
    path.push_str(rest);

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operation;

    #[test]
    fn test_render_without_params() {
        let path = render_path(&Operation::GetUsers.endpoint(), &[]).unwrap();
        assert_eq!(path, "/v1/user");
    }

    #[test]
    fn test_render_single_param() {
        let path = render_path(&Operation::GetUser.endpoint(), &["u-1"]).unwrap();
        assert_eq!(path, "/v2/user/u-1");
    }

    #[test]
    fn test_render_keeps_parameter_order() {
        let path = render_path(
            &Operation::DeleteProjectDocumentRevision.endpoint(),
            &["P1", "individual", "2", "1"],
        )
        .unwrap();
        assert_eq!(path, "/v1/project/P1/document/individual/2/1");
    }

    #[test]
    fn test_render_keeps_trailing_segments() {
        let path = render_path(&Operation::GetClaManagers.endpoint(), &["S1"]).unwrap();
        assert_eq!(path, "/v1/signature/S1/manager");

        let path = render_path(&Operation::PostEmailToCompanyAdmin.endpoint(), &["U1"]).unwrap();
        assert_eq!(path, "/v2/user/U1/invite-company-admin/");
    }

    #[test]
    fn test_render_encodes_segments() {
        let path = render_path(&Operation::GetUserByUserName.endpoint(), &["a b/c"]).unwrap();
        assert_eq!(path, "/v3/users/username/a%20b%2Fc");
    }

    #[test]
    fn test_render_param_count_mismatch() {
        let error = render_path(&Operation::GetUser.endpoint(), &[]).unwrap_err();
        assert_eq!(
            error,
            EndpointError::ParamCount {
                template: "/v2/user/{user_id}",
                expected: 1,
                got: 0,
            }
        );

        let error = render_path(&Operation::GetUsers.endpoint(), &["extra"]).unwrap_err();
        assert!(matches!(error, EndpointError::ParamCount { expected: 0, got: 1, .. }));
    }

    #[test]
    fn test_every_operation_renders_with_matching_params() {
        for op in Operation::ALL {
            let endpoint = op.endpoint();
            let names = endpoint.param_names();
            let params: Vec<&str> = names.iter().map(|_| "x").collect();
            let path = render_path(&endpoint, &params).unwrap();
            assert!(!path.contains('{'), "{} left a placeholder", op.name());
        }
    }
}
