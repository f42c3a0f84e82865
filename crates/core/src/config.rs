//! Runtime configuration and base-URL resolution.

use std::env;

use serde::{Deserialize, Serialize};

use crate::endpoint::{render_path, ApiVersion, Operation, Result};

/// Default local URL of the v1 service.
pub const DEFAULT_V1_LOCAL_URL: &str = "http://localhost:5000";
/// Default local URL of the v2 service (shared with v1).
pub const DEFAULT_V2_LOCAL_URL: &str = "http://localhost:5000";
/// Default local URL of the v3 service.
pub const DEFAULT_V3_LOCAL_URL: &str = "http://localhost:8080";

/// Per-version base URLs used in local mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUrls {
    pub v1: String,
    pub v2: String,
    pub v3: String,
}

impl Default for LocalUrls {
    fn default() -> Self {
        Self {
            v1: DEFAULT_V1_LOCAL_URL.to_string(),
            v2: DEFAULT_V2_LOCAL_URL.to_string(),
            v3: DEFAULT_V3_LOCAL_URL.to_string(),
        }
    }
}

impl LocalUrls {
    /// Base URL for `version`.
    pub fn get(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::V1 => &self.v1,
            ApiVersion::V2 => &self.v2,
            ApiVersion::V3 => &self.v3,
        }
    }

    /// Replace the base URL for `version`.
    pub fn set(&mut self, version: ApiVersion, url: impl Into<String>) {
        let url = trim_base(url.into());
        match version {
            ApiVersion::V1 => self.v1 = url,
            ApiVersion::V2 => self.v2 = url,
            ApiVersion::V3 => self.v3 = url,
        }
    }
}

/// Client configuration.
///
/// Base URLs are stored without a trailing `/` so that joining them with a
/// path template is plain concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Deployed base URL, shared by every API version.
    api_url: String,
    /// Local development URLs.
    local: LocalUrls,
    /// Whether requests target `local` instead of `api_url`.
    local_mode: bool,
}

impl ClientConfig {
    /// Configuration targeting a deployed backend.
    ///
    /// Trailing slashes are stripped from `api_url`, as in
    /// [`ClientConfig::set_api_url`].
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: trim_base(api_url.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLA_API_URL` - Deployed base URL (default: empty)
    /// - `CLA_LOCAL_MODE` - `1`, `true` or `yes` to target local services (default: off)
    /// - `CLA_V1_LOCAL_URL` - Local v1 URL (default: "http://localhost:5000")
    /// - `CLA_V2_LOCAL_URL` - Local v2 URL (default: "http://localhost:5000")
    /// - `CLA_V3_LOCAL_URL` - Local v3 URL (default: "http://localhost:8080")
    pub fn from_env() -> Self {
        let mut local = LocalUrls::default();
        for (version, var) in [
            (ApiVersion::V1, "CLA_V1_LOCAL_URL"),
            (ApiVersion::V2, "CLA_V2_LOCAL_URL"),
            (ApiVersion::V3, "CLA_V3_LOCAL_URL"),
        ] {
            if let Ok(url) = env::var(var) {
                local.set(version, url);
            }
        }

        Self {
            api_url: trim_base(env::var("CLA_API_URL").unwrap_or_default()),
            local,
            local_mode: env::var("CLA_LOCAL_MODE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Set the local development URLs.
    pub fn with_local_urls(mut self, local: LocalUrls) -> Self {
        self.local = local;
        self
    }

    /// Enable or disable local mode.
    pub fn with_local_mode(mut self, enabled: bool) -> Self {
        self.local_mode = enabled;
        self
    }

    /// Deployed base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Replace the deployed base URL.
    ///
    /// Trailing slashes are stripped so that resolution can concatenate the
    /// base and the path. The value is otherwise stored as given, with no
    /// validation.
    pub fn set_api_url(&mut self, api_url: impl Into<String>) {
        self.api_url = trim_base(api_url.into());
    }

    /// Local development URLs.
    pub fn local_urls(&self) -> &LocalUrls {
        &self.local
    }

    /// Mutable access to the local development URLs.
    pub fn local_urls_mut(&mut self) -> &mut LocalUrls {
        &mut self.local
    }

    /// Whether local mode is enabled.
    pub fn is_local_mode(&self) -> bool {
        self.local_mode
    }

    /// Enable or disable local mode.
    pub fn set_local_mode(&mut self, enabled: bool) {
        self.local_mode = enabled;
    }

    /// Base URL requests for `version` are sent to.
    pub fn base_url(&self, version: ApiVersion) -> &str {
        if self.local_mode {
            self.local.get(version)
        } else {
            &self.api_url
        }
    }

    /// Full URL for `operation`: base URL, rendered path, then `query` verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use cla_core::{ClientConfig, Operation};
    ///
    /// let config = ClientConfig::new("https://api.example.org/");
    /// let url = config.resolve(Operation::GetUser, &["u1"], "").unwrap();
    /// assert_eq!(url, "https://api.example.org/v2/user/u1");
    ///
    /// let local = config.with_local_mode(true);
    /// let url = local.resolve(Operation::GetReleaseVersion, &[], "").unwrap();
    /// assert_eq!(url, "http://localhost:8080/v3/ops/version");
    /// ```
    pub fn resolve(&self, operation: Operation, params: &[&str], query: &str) -> Result<String> {
        let endpoint = operation.endpoint();
        let path = render_path(&endpoint, params)?;
        Ok(format!("{}{}{}", self.base_url(endpoint.version), path, query))
    }
}

/// Strip trailing slashes from a base URL.
fn trim_base(url: String) -> String {
    match url.trim_end_matches('/').len() {
        len if len == url.len() => url,
        len => url[..len].to_string(),
    }
}

/// Parse a boolean-ish environment value.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployed() -> ClientConfig {
        ClientConfig::new("https://api.dev.example.org")
    }

    #[test]
    fn test_default_local_urls() {
        let local = LocalUrls::default();
        assert_eq!(local.get(ApiVersion::V1), "http://localhost:5000");
        assert_eq!(local.get(ApiVersion::V2), "http://localhost:5000");
        assert_eq!(local.get(ApiVersion::V3), "http://localhost:8080");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://api.dev.example.org//");
        assert_eq!(config.api_url(), "https://api.dev.example.org");

        let mut local = LocalUrls::default();
        local.set(ApiVersion::V3, "http://127.0.0.1:9000/");
        assert_eq!(local.get(ApiVersion::V3), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_set_api_url_strips_slashes_only() {
        let mut config = ClientConfig::default();
        config.set_api_url("not a url/");
        assert_eq!(config.api_url(), "not a url");

        config.set_api_url("https://api.example.org/base/");
        assert_eq!(
            config.resolve(Operation::GetUsers, &[], "").unwrap(),
            "https://api.example.org/base/v1/user"
        );
    }

    #[test]
    fn test_deployed_mode_uses_api_url_for_every_version() {
        let config = deployed();
        for version in ApiVersion::ALL {
            assert_eq!(config.base_url(version), "https://api.dev.example.org");
        }
    }

    #[test]
    fn test_local_mode_uses_per_version_urls() {
        let config = deployed().with_local_mode(true);
        let v1 = config.resolve(Operation::GetUsers, &[], "").unwrap();
        let v3 = config.resolve(Operation::GetReleaseVersion, &[], "").unwrap();
        assert_eq!(v1, "http://localhost:5000/v1/user");
        assert_eq!(v3, "http://localhost:8080/v3/ops/version");
    }

    #[test]
    fn test_resolve_is_base_plus_path_for_every_operation() {
        for local_mode in [false, true] {
            let config = deployed().with_local_mode(local_mode);
            for op in Operation::ALL {
                let endpoint = op.endpoint();
                let params: Vec<&str> = endpoint.param_names().iter().map(|_| "id").collect();
                let url = config.resolve(*op, &params, "").unwrap();
                let expected = format!(
                    "{}{}",
                    config.base_url(endpoint.version),
                    render_path(&endpoint, &params).unwrap()
                );
                assert_eq!(url, expected, "{}", op.name());
            }
        }
    }

    #[test]
    fn test_toggling_local_mode_changes_only_the_base() {
        let mut config = deployed();
        let deployed_url = config.resolve(Operation::GetSignature, &["S1"], "").unwrap();
        config.set_local_mode(true);
        let local_url = config.resolve(Operation::GetSignature, &["S1"], "").unwrap();

        assert_eq!(deployed_url, "https://api.dev.example.org/v1/signature/S1");
        assert_eq!(local_url, "http://localhost:5000/v1/signature/S1");
        assert!(deployed_url.ends_with("/v1/signature/S1"));
        assert!(local_url.ends_with("/v1/signature/S1"));
    }

    #[test]
    fn test_last_api_url_write_wins() {
        let mut config = deployed();
        config.set_api_url("https://first.example.org");
        config.set_api_url("https://second.example.org/");
        assert_eq!(config.api_url(), "https://second.example.org");
    }

    #[test]
    fn test_resolve_appends_query() {
        let url = deployed()
            .resolve(
                Operation::GetCompanyProjectSignatures,
                &["P1", "C1"],
                "?pageSize=50",
            )
            .unwrap();
        assert_eq!(
            url,
            "https://api.dev.example.org/v3/signatures/project/P1/company/C1?pageSize=50"
        );
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("nope"));
    }
}
