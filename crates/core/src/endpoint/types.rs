//! Endpoint descriptor types.
//!
//! Pure data describing how a logical operation reaches the backend. Nothing
//! here performs I/O.

use std::fmt;

use serde::Serialize;

/// Backend API version an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V1,
    V2,
    V3,
}

impl ApiVersion {
    /// All versions, in order.
    pub const ALL: [ApiVersion; 3] = [ApiVersion::V1, ApiVersion::V2, ApiVersion::V3];

    /// Path prefix every endpoint of this version starts with.
    pub fn prefix(self) -> &'static str {
        match self {
            ApiVersion::V1 => "/v1/",
            ApiVersion::V2 => "/v2/",
            ApiVersion::V3 => "/v3/",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => write!(f, "v1"),
            ApiVersion::V2 => write!(f, "v2"),
            ApiVersion::V3 => write!(f, "v3"),
        }
    }
}

/// HTTP verb used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Whether requests with this method may carry a body.
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

/// Credential requirement of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Auth {
    /// Plain, unauthenticated request.
    None,
    /// Session credentials sent along with the request (`getWithCreds`).
    Cookie,
    /// Bearer token attached (`securedGet` / `securedPost`).
    Bearer,
}

impl fmt::Display for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::None => write!(f, "none"),
            Auth::Cookie => write!(f, "cookie"),
            Auth::Bearer => write!(f, "bearer"),
        }
    }
}

/// How a successful response body is handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Body is parsed as JSON.
    Json,
    /// Body text is passed through untouched.
    Raw,
}

/// Transport method a request is dispatched to.
///
/// Derived from an endpoint's method and auth requirement; see
/// [`Endpoint::surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Get,
    Post,
    Put,
    Delete,
    GetWithCreds,
    SecuredGet,
    SecuredPost,
}

impl Surface {
    /// Whether this surface attaches credentials.
    pub fn is_credentialed(self) -> bool {
        matches!(
            self,
            Surface::GetWithCreds | Surface::SecuredGet | Surface::SecuredPost
        )
    }
}

/// Static description of a backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: HttpMethod,
    /// Path with `{name}` placeholders, starting with the version prefix.
    pub path: &'static str,
    pub version: ApiVersion,
    pub auth: Auth,
    pub response: ResponseKind,
}

impl Endpoint {
    /// Plain JSON endpoint.
    pub const fn new(method: HttpMethod, version: ApiVersion, path: &'static str) -> Self {
        Self {
            method,
            path,
            version,
            auth: Auth::None,
            response: ResponseKind::Json,
        }
    }

    /// Set the credential requirement.
    pub const fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Mark the response body as raw text.
    pub const fn raw(mut self) -> Self {
        self.response = ResponseKind::Raw;
        self
    }

    /// Transport surface for this endpoint, if the method/auth pair has one.
    pub fn surface(&self) -> Option<Surface> {
        match (self.method, self.auth) {
            (HttpMethod::Get, Auth::None) => Some(Surface::Get),
            (HttpMethod::Post, Auth::None) => Some(Surface::Post),
            (HttpMethod::Put, Auth::None) => Some(Surface::Put),
            (HttpMethod::Delete, Auth::None) => Some(Surface::Delete),
            (HttpMethod::Get, Auth::Cookie) => Some(Surface::GetWithCreds),
            (HttpMethod::Get, Auth::Bearer) => Some(Surface::SecuredGet),
            (HttpMethod::Post, Auth::Bearer) => Some(Surface::SecuredPost),
            _ => None,
        }
    }

    /// Names of the path placeholders, in order.
    pub fn param_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_prefix_and_display() {
        assert_eq!(ApiVersion::V1.prefix(), "/v1/");
        assert_eq!(ApiVersion::V3.prefix(), "/v3/");
        assert_eq!(ApiVersion::V2.to_string(), "v2");
    }

    #[test]
    fn test_surface_selection() {
        let plain = Endpoint::new(HttpMethod::Get, ApiVersion::V1, "/v1/user");
        assert_eq!(plain.surface(), Some(Surface::Get));

        let creds = plain.with_auth(Auth::Cookie);
        assert_eq!(creds.surface(), Some(Surface::GetWithCreds));

        let secured_post = Endpoint::new(HttpMethod::Post, ApiVersion::V1, "/v1/user/gerrit")
            .with_auth(Auth::Bearer);
        assert_eq!(secured_post.surface(), Some(Surface::SecuredPost));
        assert!(Surface::SecuredPost.is_credentialed());
        assert!(!Surface::Post.is_credentialed());
    }

    #[test]
    fn test_unsupported_surface() {
        let endpoint = Endpoint::new(HttpMethod::Delete, ApiVersion::V1, "/v1/user/{user_id}")
            .with_auth(Auth::Cookie);
        assert_eq!(endpoint.surface(), None);
    }

    #[test]
    fn test_param_names() {
        let endpoint = Endpoint::new(
            HttpMethod::Get,
            ApiVersion::V2,
            "/v2/user/{user_id}/project/{project_id}/last-signature",
        );
        assert_eq!(endpoint.param_names(), vec!["user_id", "project_id"]);

        let bare = Endpoint::new(HttpMethod::Get, ApiVersion::V1, "/v1/user");
        assert!(bare.param_names().is_empty());
    }

    #[test]
    fn test_raw_marker() {
        let endpoint = Endpoint::new(HttpMethod::Get, ApiVersion::V2, "/v2/x").raw();
        assert_eq!(endpoint.response, ResponseKind::Raw);
        assert_eq!(endpoint.auth, Auth::None);
    }

    #[test]
    fn test_method_has_body() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }
}
